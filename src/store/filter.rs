use crate::models::{Item, ItemQuery};

impl ItemQuery {
    pub fn is_wildcard(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.count.is_none() && self.category.is_none()
    }

    /// Check if the item satisfies every constraint that is set.
    /// Matching is exact; there is no range or substring matching.
    pub fn matches(&self, item: &Item) -> bool {
        self.name.as_deref().map_or(true, |name| item.name() == name)
            && self.price.map_or(true, |price| item.price() == price)
            && self.count.map_or(true, |count| item.count() == count)
            && self.category.map_or(true, |category| item.category() == category)
    }
}

/// Keep the items matched by `query`, preserving their order.
pub fn select<'a, I>(items: I, query: &ItemQuery) -> Vec<Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| query.matches(item))
        .cloned()
        .collect()
}

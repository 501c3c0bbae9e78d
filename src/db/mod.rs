pub mod dbinventory;

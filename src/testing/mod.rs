pub mod random_rings;

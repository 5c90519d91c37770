// Value types shared between the formatting engine and field hosts.
// Kept free of formatting logic so hosts can depend on them alone.

pub mod models;

pub mod task001;
pub mod task002;

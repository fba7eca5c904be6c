pub mod boy;

pub mod method_not_allowed;

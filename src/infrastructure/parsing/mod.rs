mod cloud_parse_adapter;

pub use cloud_parse_adapter::CloudParseAdapter;

// Infrastructure layer: adapters, file I/O, serde, schema checks, markup
pub mod html_encoder;
pub mod schema_validator;
pub mod serde_json_adapter;
pub mod url_netloc;

// Zync services
// Settings persistence, navigation target selection and bundled asset serving.

pub mod asset_server;
pub mod settings_engine;
pub mod url_resolver;

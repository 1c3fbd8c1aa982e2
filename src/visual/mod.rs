pub(crate) mod composite;
pub(crate) mod fingerprint;
pub(crate) mod state;
pub(crate) mod svg;

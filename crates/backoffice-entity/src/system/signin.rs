use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// One request recorded by the sign-in audit log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigninLog {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub client_ip: String,
    pub remote_ip: String,
    pub full_path: String,
    pub method: String,
    pub resp_code: i32,
    /// Id of the object the request acted on.
    pub target_id: String,
}

impl_resource!(SigninLog, prefix = "sys_", model = "signin", suffix = "_log", reference = "signins");

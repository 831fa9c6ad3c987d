use serde::{Deserialize, Serialize};

use circpack::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::TSFConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TSFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: TSFConfig,
}

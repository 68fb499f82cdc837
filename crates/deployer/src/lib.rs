#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod artifact;
pub use artifact::{ArtifactError, ContractArtifact};

mod deploy;
pub use deploy::{Deploy, ProviderDeployError, ProviderDeployer};

mod sequence;
pub use sequence::{run_deployment, DeployError, DeployedAddresses, DeploymentPlan};

//! Git publishing of the generated dataset
//!
//! Failures here never fail the run: the file on disk is already valid.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::{info, warn};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("failed to run `git {args}`: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {args}` exited with {status}: {stderr}")]
    Failed {
        args: String,
        status: String,
        stderr: String,
    },
}

/// Stages, commits and pushes one file in a working tree
#[derive(Debug, Clone)]
pub struct GitPublisher {
    repo_root: PathBuf,
    user_name: String,
    user_email: String,
    message: String,
}

impl GitPublisher {
    pub fn from_config(config: &Config) -> Self {
        Self {
            repo_root: config.repo_root.clone(),
            user_name: config.git_user_name.clone(),
            user_email: config.git_user_email.clone(),
            message: config.commit_message.clone(),
        }
    }

    /// Commit `file` and push.
    ///
    /// A failing commit usually means nothing changed, so it is logged and
    /// the push still runs.
    pub fn publish(&self, file: &Path) -> Result<(), VcsError> {
        let file = file.strip_prefix(&self.repo_root).unwrap_or(file);
        let file = file.to_string_lossy();

        self.git(&["config", "user.email", self.user_email.as_str()])?;
        self.git(&["config", "user.name", self.user_name.as_str()])?;
        self.git(&["add", &*file])?;

        if let Err(e) = self.git(&["commit", "-m", self.message.as_str(), "--no-verify"]) {
            info!("No changes to commit or commit failed: {}", e);
        }

        self.git(&["push"])?;
        info!("Pushed changes");
        Ok(())
    }

    fn git(&self, args: &[&str]) -> Result<Output, VcsError> {
        let joined = args.join(" ");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|source| VcsError::Spawn {
                args: joined.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(VcsError::Failed {
                args: joined,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

/// Publish and log any failure instead of returning it.
pub fn publish_or_warn(config: &Config, file: &Path) -> bool {
    match GitPublisher::from_config(config).publish(file) {
        Ok(()) => true,
        Err(e) => {
            warn!("Git commit/push failed: {}", e);
            false
        }
    }
}

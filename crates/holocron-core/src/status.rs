//! Fetch lifecycle status shared by the collection and detail channels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where one fetch channel is in its lifecycle.
///
/// A channel starts `Idle`, moves to `Loading` when work begins, and settles
/// on `Succeeded` or `Failed`. It never returns to `Idle`; a fresh fetch
/// re-enters `Loading` from either settled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
  #[default]
  Idle,
  Loading,
  Succeeded,
  Failed,
}

impl FetchStatus {
  pub fn is_loading(self) -> bool { matches!(self, Self::Loading) }

  /// Whether a collection fetch may start from this state.
  pub fn can_start_fetch(self) -> bool {
    matches!(self, Self::Idle | Self::Failed)
  }
}

impl fmt::Display for FetchStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Idle => "idle",
      Self::Loading => "loading",
      Self::Succeeded => "succeeded",
      Self::Failed => "failed",
    })
  }
}

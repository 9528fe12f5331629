//! ECC runtime configuration (portable tunables + overrides).
//!
//! Overrides are read once per process from the environment when `std` is
//! enabled:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `ECC_FORCE` | `auto`, `reference`, `table`, `swar` |
//! | `ECC_THRESHOLD_TABLE_TO_SWAR` | minimum length for the SWAR kernel |
//!
//! Unparseable values are ignored.

/// Forced kernel selection for the ECC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EccForce {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the bitwise reference implementation (slow, obviously correct).
  Reference,
  /// Force the byte-at-a-time table kernel.
  Table,
  /// Force the eight-bytes-per-step kernel.
  Swar,
}

impl EccForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Table => "table",
      Self::Swar => "swar",
    }
  }
}

/// ECC selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EccTunables {
  /// Minimum `len` in bytes to use the SWAR kernel (otherwise table).
  pub table_to_swar: usize,
}

impl Default for EccTunables {
  fn default() -> Self {
    Self {
      table_to_swar: DEFAULT_TABLE_TO_SWAR,
    }
  }
}

/// Full ECC runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EccConfig {
  /// Requested force mode.
  pub requested_force: EccForce,
  /// Force mode actually applied.
  ///
  /// Identical to `requested_force`: every kernel is portable.
  pub effective_force: EccForce,
  /// Tunables used by the selector.
  pub tunables: EccTunables,
}

const DEFAULT_TABLE_TO_SWAR: usize = 64;

/// Below one word the SWAR kernel has nothing to batch.
const MIN_TABLE_TO_SWAR: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overrides {
  force: EccForce,
  table_to_swar: Option<usize>,
}

#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_usize(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_force(value: &str) -> Option<EccForce> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if value.eq_ignore_ascii_case("auto") {
    return Some(EccForce::Auto);
  }
  if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
    return Some(EccForce::Reference);
  }
  if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
    return Some(EccForce::Table);
  }
  if value.eq_ignore_ascii_case("swar") || value.eq_ignore_ascii_case("word") {
    return Some(EccForce::Swar);
  }

  None
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let var = |name: &str| std::env::var(name).ok();

  Overrides {
    force: var("ECC_FORCE")
      .as_deref()
      .and_then(parse_force)
      .unwrap_or(EccForce::Auto),
    table_to_swar: var("ECC_THRESHOLD_TABLE_TO_SWAR").as_deref().and_then(parse_usize),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

#[inline]
#[must_use]
fn config(ov: Overrides) -> EccConfig {
  let mut table_to_swar = DEFAULT_TABLE_TO_SWAR;
  if let Some(v) = ov.table_to_swar {
    table_to_swar = v.max(MIN_TABLE_TO_SWAR);
  }

  EccConfig {
    requested_force: ov.force,
    effective_force: ov.force,
    tunables: EccTunables { table_to_swar },
  }
}

/// Cached process-wide ECC configuration.
#[inline]
#[must_use]
pub fn get() -> EccConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<EccConfig> = OnceLock::new();
    *CACHED.get_or_init(|| config(overrides()))
  }

  #[cfg(not(feature = "std"))]
  {
    config(overrides())
  }
}

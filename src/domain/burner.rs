//! Disposable-email-domain lookup contract.

use async_trait::async_trait;

/// Lookup over the set of known disposable ("burner") email providers.
///
/// The list itself is an external collaborator; where it comes from and how
/// often it is refreshed is outside this crate. Implementations must be
/// thread-safe.
///
/// This trait is consulted only by the server-side validation policy. The
/// rendering layer ([`crate::web`]) must not reference it, so the lookup can
/// never leak into a context that serves untrusted-side code.
///
/// # Implementations
///
/// - [`crate::infrastructure::burner_list::StaticBurnerList`] - in-memory snapshot
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BurnerDomainList: Send + Sync {
    /// Returns `true` when `domain` belongs to a known disposable provider.
    ///
    /// Matching is ASCII-case-insensitive on the full domain.
    async fn is_burner(&self, domain: &str) -> bool;

    /// Reports whether the lookup is usable.
    ///
    /// A snapshot-backed implementation returns `false` when its snapshot is
    /// empty, which would silently disable the burner check.
    async fn health_check(&self) -> bool;
}

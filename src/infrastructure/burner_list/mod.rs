//! Disposable-domain lookup backed by an in-memory snapshot.
//!
//! Provides [`StaticBurnerList`], the production implementation of
//! [`crate::domain::burner::BurnerDomainList`]. The snapshot is either the
//! one bundled with the binary or a newline-delimited file configured via
//! `BURNER_LIST_PATH`.

mod static_list;

pub use static_list::StaticBurnerList;

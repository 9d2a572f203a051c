use super::*;
use crate::storage::MemoryStorage;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Badge {
    holder: String,
}

impl SessionRecord for Badge {
    const KEYS: &'static [&'static str] = &["holder"];

    fn from_storage(mut read: impl FnMut(&'static str) -> Option<String>) -> Self {
        Self { holder: read("holder").unwrap_or_default() }
    }

    fn to_storage(&self) -> Vec<(&'static str, &str)> {
        vec![("holder", self.holder.as_str())]
    }

    fn is_complete(&self) -> bool {
        !self.holder.is_empty()
    }
}

fn badge(holder: &str) -> Badge {
    Badge { holder: holder.to_owned() }
}

#[test]
fn presence_follows_establish_and_clear() {
    let session = SessionContext::<Badge, MemoryStorage>::open_with(MemoryStorage::new());
    let presence = session.presence();
    assert!(!presence.get_untracked());

    assert_eq!(session.establish(badge("ana")), Ok(()));
    assert!(presence.get_untracked());
    assert_eq!(session.current(), Some(badge("ana")));

    assert_eq!(session.clear(), Ok(()));
    assert!(!presence.get_untracked());
    assert_eq!(session.current(), None);
}

#[test]
fn opens_from_existing_storage() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.set("holder", "ana"), Ok(()));
    let session = SessionContext::<Badge, MemoryStorage>::open_with(storage);
    assert!(session.is_present());
    assert_eq!(session.storage_error(), None);
}

#[test]
fn incomplete_record_is_readable_but_not_current() {
    let session = SessionContext::<Badge, MemoryStorage>::open_with(MemoryStorage::new());
    assert_eq!(session.establish(badge("")), Ok(()));
    assert_eq!(session.current(), None);
    assert_eq!(session.with_record(|r| r.holder.len()), 0);
}

#[test]
fn copies_share_one_store() {
    let session = SessionContext::<Badge, MemoryStorage>::open_with(MemoryStorage::new());
    let copy = session;
    assert_eq!(copy.establish(badge("ana")), Ok(()));
    assert!(session.is_present());
}

#[cfg(not(feature = "browser"))]
#[test]
fn browser_storage_off_the_web_reports_unavailable() {
    let session = SessionContext::<Badge>::open();
    let presence = session.presence();
    assert_eq!(session.storage_error(), Some(StorageError::Unavailable));
    assert!(!presence.get_untracked());

    assert_eq!(session.establish(badge("ana")), Err(StorageError::Unavailable));
    assert!(presence.get_untracked());

    assert_eq!(session.clear(), Err(StorageError::Unavailable));
    assert!(!presence.get_untracked());
}

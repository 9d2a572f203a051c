//! Table session established by scanning a table's QR code.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scanner page establishes the session from the backend's table-login
//! response; the guarded outlet reads presence on every navigation; ending
//! the session clears it. One [`SessionContext`] is created by the app root
//! and provided through Leptos context.
//!
//! DESIGN
//! ======
//! The record mirrors the backend's table-login response
//! (`table_id`, `session_token`, `table_number`). An earlier layout stored
//! `table_id`, `session_id` and `access_token`; its two extra keys are
//! retired and swept whenever the session is cleared.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gate::SessionRecord;

pub const TABLE_ID_KEY: &str = "table_id";
pub const SESSION_TOKEN_KEY: &str = "session_token";
pub const TABLE_NUMBER_KEY: &str = "table_number";

/// Keys written by the superseded three-field layout.
pub const RETIRED_SESSION_KEYS: &[&str] = &["session_id", "access_token"];

/// Active table session. `table_id` and `session_token` are mandatory;
/// `table_number` is display-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSession {
    pub table_id: String,
    pub session_token: String,
    pub table_number: Option<String>,
}

impl TableSession {
    pub fn new(table_id: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self { table_id: table_id.into(), session_token: session_token.into(), table_number: None }
    }

    #[must_use]
    pub fn with_table_number(mut self, table_number: impl Into<String>) -> Self {
        self.table_number = Some(table_number.into());
        self
    }
}

impl SessionRecord for TableSession {
    const KEYS: &'static [&'static str] = &[TABLE_ID_KEY, SESSION_TOKEN_KEY, TABLE_NUMBER_KEY];
    const RETIRED_KEYS: &'static [&'static str] = RETIRED_SESSION_KEYS;

    fn from_storage(mut read: impl FnMut(&'static str) -> Option<String>) -> Self {
        Self {
            table_id: read(TABLE_ID_KEY).unwrap_or_default(),
            session_token: read(SESSION_TOKEN_KEY).unwrap_or_default(),
            table_number: read(TABLE_NUMBER_KEY),
        }
    }

    fn to_storage(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![(TABLE_ID_KEY, self.table_id.as_str()), (SESSION_TOKEN_KEY, self.session_token.as_str())];
        if let Some(number) = &self.table_number {
            entries.push((TABLE_NUMBER_KEY, number.as_str()));
        }
        entries
    }

    fn is_complete(&self) -> bool {
        !self.table_id.is_empty() && !self.session_token.is_empty()
    }
}

/// Reactive handle over the tab's table session.
pub type SessionContext = gate::SessionContext<TableSession>;

/// Table number to show in the header, if the backend supplied one.
pub fn table_number(session: SessionContext) -> Option<String> {
    session.with_record(|r| r.table_number.clone())
}

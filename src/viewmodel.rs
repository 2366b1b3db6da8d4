use crate::observable::Observable;
use crate::user::UserRow;

/// The `UserViewModel` owns the single observable list of presentation
/// rows the view binds to. It starts with an empty list present, so the
/// first replay renders an empty list rather than "no data".
pub struct UserViewModel {
    pub users: Observable<Vec<UserRow>>,
}

impl UserViewModel {
    pub fn new() -> Self {
        UserViewModel {
            users: Observable::new(Some(vec![])),
        }
    }

    /// Number of rows currently held
    pub fn row_count(&self) -> usize {
        self.users.value().map_or(0, |rows| rows.len())
    }

    /// Returns the row at `index`, if present
    pub fn row(&self, index: usize) -> Option<&UserRow> {
        self.users.value().and_then(|rows| rows.get(index))
    }
}

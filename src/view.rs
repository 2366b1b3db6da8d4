use crate::viewmodel::UserViewModel;
use std::sync::Weak;
use tokio::sync::RwLock;

/// Terminal list view for the user list.
///
/// The view pulls row data from the view-model through a weak
/// back-reference: the reference is used for rendering only and never
/// keeps the view-model alive. If the owner has been dropped the view
/// renders an empty list.
pub struct UserListView {
    viewmodel: Weak<RwLock<UserViewModel>>,
}

impl UserListView {
    pub fn new(viewmodel: Weak<RwLock<UserViewModel>>) -> Self {
        UserListView { viewmodel }
    }

    /// Number of rows the list should display
    pub async fn row_count(&self) -> usize {
        match self.viewmodel.upgrade() {
            Some(viewmodel_lock) => {
                let viewmodel = viewmodel_lock.read().await;
                viewmodel.row_count()
            }
            None => 0,
        }
    }

    /// Text content for the row at `index`: (name, website)
    pub async fn row_content(&self, index: usize) -> Option<(String, String)> {
        let viewmodel_lock = self.viewmodel.upgrade()?;
        let viewmodel = viewmodel_lock.read().await;
        viewmodel
            .row(index)
            .map(|row| (row.name().to_string(), row.website().to_string()))
    }

    /// Re-renders the whole list. No incremental diffing: every
    /// notification repaints all rows.
    pub async fn reload(&self) {
        let count = self.row_count().await;
        println!("users ({})", count);
        for index in 0..count {
            if let Some((name, website)) = self.row_content(index).await {
                println!("  {}  {}", name, website);
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::user::UserRow;
    use std::sync::Arc;

    #[tokio::test]
    async fn view_pulls_rows_test() {
        let viewmodel_lock = Arc::new(RwLock::new(UserViewModel::new()));
        let view = UserListView::new(Arc::downgrade(&viewmodel_lock));

        assert_eq!(view.row_count().await, 0);
        assert!(view.row_content(0).await.is_none());

        {
            let mut viewmodel = viewmodel_lock.write().await;
            viewmodel.users.set_value(Some(vec![
                UserRow::new("Ada".to_string(), "ada.dev".to_string()),
                UserRow::new("Bo".to_string(), "bo.dev".to_string()),
            ]));
        }

        assert_eq!(view.row_count().await, 2);
        assert_eq!(
            view.row_content(1).await,
            Some(("Bo".to_string(), "bo.dev".to_string()))
        );
    }

    #[tokio::test]
    async fn view_survives_dropped_viewmodel_test() {
        let viewmodel_lock = Arc::new(RwLock::new(UserViewModel::new()));
        let view = UserListView::new(Arc::downgrade(&viewmodel_lock));

        drop(viewmodel_lock);

        assert_eq!(view.row_count().await, 0);
        assert!(view.row_content(0).await.is_none());
        view.reload().await;
    }
}

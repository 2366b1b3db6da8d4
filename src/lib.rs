/*!
# Userlist

A minimal MVVM demonstration in Rust. An [`observable::Observable`] binds
the [`viewmodel::UserViewModel`] to a terminal list view: a background task
fetches a JSON array of users over HTTP, decodes and maps it into
presentation rows, and hands the result back to the context that owns the
view-model, which writes it into the observable. The bound listener fires
synchronously on every write and the view re-renders the full list.

The observable supports exactly one listener. Binding replays the current
value to the new listener and silently replaces any previous one.

# Usage

```bash
userlist_rust --endpoint https://jsonplaceholder.typicode.com/users
```
*/

pub mod app;
pub mod fetch;
pub mod observable;
pub mod user;
pub mod view;
pub mod viewmodel;

/// Error returned by most functions
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for userlist operations
pub type Result<T> = std::result::Result<T, Error>;

/*!
# Userlist Command Line Interface

## Help

```bash
userlist_rust --help
```

## Example Usage

```bash
userlist_rust --endpoint=https://jsonplaceholder.typicode.com/users
```

## Dev

To run from source:

```bash
cargo run -- --help
cargo run -- --endpoint=https://jsonplaceholder.typicode.com/users
```
*/

use userlist_rust::app;

#[tokio::main]
pub async fn main() -> userlist_rust::Result<()> {
    tracing_subscriber::fmt::init();
    app::run().await
}

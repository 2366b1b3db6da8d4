use crate::fetch;
use crate::user::UserRow;
use crate::view::UserListView;
use crate::viewmodel::UserViewModel;
use clap::{App, Arg};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::{mpsc, RwLock};
use tracing::{event, Level};

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

///
/// Messages handled by the main app loop. Convention has the message begin
/// with the collaborator that produced it.
///
#[derive(Clone, Debug)]
pub enum AppMessage {
    // sent by the fetch task once the payload has been decoded and mapped
    FetchComplete { rows: Vec<UserRow> },
    // sent by the bound listener so rendering happens on the owning context
    ViewReloadData,
}

///
/// The entry point to the userlist runtime
///
pub async fn run() -> crate::Result<()> {
    //
    // handle command-line arguments
    //
    let matches = App::new("Userlist Runtime")
        .about("Fetches a user list and renders it through an observable binding")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("config file name"),
        )
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .takes_value(true)
                .help("user list endpoint URL"),
        )
        .get_matches();

    let config_name = match matches.value_of("config") {
        Some(name) => name,
        None => "config",
    };

    let mut settings = config::Config::default();
    if let Err(err) = settings.merge(config::File::with_name(config_name)) {
        event!(Level::DEBUG, "no config file loaded: {:?}", err);
    }

    let endpoint = match matches.value_of("endpoint") {
        Some(endpoint) => endpoint.to_string(),
        None => match settings.get::<String>("fetch.endpoint") {
            Ok(endpoint) => endpoint,
            Err(_) => String::from(DEFAULT_ENDPOINT),
        },
    };

    //
    // instantiate the view-model and the view.
    //
    // the view-model is owned by this loop and wrapped in Tokio::RwLock for
    // read().await / write().await access. the view only ever holds a weak
    // back-reference, so the binding can never extend the owner's lifetime.
    //
    let viewmodel_lock = Arc::new(RwLock::new(UserViewModel::new()));
    let view = UserListView::new(Arc::downgrade(&viewmodel_lock));

    let (app_channel_sender, mut app_channel_receiver) = mpsc::unbounded_channel();

    //
    // bind the view to the view-model.
    //
    // the listener runs synchronously inside set_value and must not render
    // inline while the write lock is held. it forwards ViewReloadData and
    // the loop below re-renders after the lock is released. the context hop
    // belongs to the caller, not to the Observable.
    //
    {
        let reload_sender = app_channel_sender.clone();
        let mut viewmodel = viewmodel_lock.write().await;
        viewmodel.users.bind(move |_| {
            let _ = reload_sender.send(AppMessage::ViewReloadData);
        });
    }

    //
    // start the background fetch. fire-and-forget: no cancellation, no
    // retry. a failed fetch never touches the view-model.
    //
    event!(Level::INFO, "fetching users from {}", endpoint);
    tokio::spawn(fetch::run(endpoint, app_channel_sender.clone()));

    loop {
        tokio::select! {

            //
            // App Channel Messages
            //
            Some(message) = app_channel_receiver.recv() => {
                match message {
                    //
                    // fetch result is applied on this context, the one
                    // that owns the view-model
                    //
                    AppMessage::FetchComplete { rows } => {
                        let mut viewmodel = viewmodel_lock.write().await;
                        viewmodel.users.set_value(Some(rows));
                    },
                    AppMessage::ViewReloadData => {
                        view.reload().await;
                    },
                }
            }

            _ = signal::ctrl_c() => {
                println!("Shutting down!");
                break;
            }
        }
    }

    Ok(())
}

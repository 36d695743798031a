mod characteristic;
pub use characteristic::{Characteristic, HeatingCoolingState, TargetMode};

mod topic;
pub use topic::{Topic, TopicType};

use std::time::Duration;

use log::error;
use paho_mqtt as mqtt;

/// Brokers behind TLS are only reachable with SSL options set.
fn uses_tls(address: &str) -> bool {
    address.starts_with("ssl://") || address.starts_with("mqtts://")
}

pub async fn connect_mqtt(
    address: String,
    username: Option<String>,
    password: Option<String>,
    client_id: &str,
) -> Result<mqtt::AsyncClient, mqtt::Error> {
    let tls = uses_tls(&address);

    let create_opts = mqtt::CreateOptionsBuilder::new_v3()
        .server_uri(address)
        .client_id(client_id)
        .finalize();

    let client = mqtt::AsyncClient::new(create_opts).inspect_err(|err| {
        error!("Error creating the client: {}", err);
    })?;

    let mut conn_opts = mqtt::ConnectOptionsBuilder::new_v3();
    conn_opts
        .keep_alive_interval(Duration::from_secs(30))
        .clean_session(false);

    if tls {
        conn_opts.ssl_options(mqtt::SslOptions::new());
    }

    if let Some(username) = username {
        conn_opts.user_name(username);
    }

    if let Some(password) = password {
        conn_opts.password(password);
    }

    client.connect(conn_opts.finalize()).await?;

    Ok(client)
}

use ingrid::{describe, list_heaters, Bridge, Config, Error, MqttThermostat, Result};
use incomfort::Gateway;
use transport::connect_mqtt;

use log::{debug, error, info};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;
use tokio::task;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    info!("ingrid version {VERSION}");

    if std::env::args().skip(1).any(|arg| arg == "--list") {
        return list().await;
    }

    let config = Config::from_env()?;

    let gateway = Gateway::connect(&config.gateway_host)?;
    let mut heaters = gateway.discover().await.inspect_err(|err| {
        error!("Failed to communicate with incomfort gateway: {err}");
    })?;

    if heaters.is_empty() {
        return Err(Error::NoHeaters);
    }

    let heater = heaters.remove(0);
    info!("tracking heater {} at slot {}", heater.name(), heater.index());

    let mqtt_client = connect_mqtt(
        config.mqtt_address,
        config.mqtt_username,
        config.mqtt_password,
        "ingrid",
    )
    .await?;
    info!("connected mqtt");

    let accessory = MqttThermostat::new(mqtt_client, config.device_name);
    let changes = accessory.subscribe_target_temperature().await?;

    let bridge = Bridge::new(gateway, heater, accessory.clone());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let periodic = task::spawn(
        bridge
            .clone()
            .run_periodic(config.poll_interval, shutdown_rx.clone()),
    );
    let relay = task::spawn(bridge.relay_target_temperature(changes, shutdown_rx));

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => info!("got SIGTERM, exiting..."),
        _ = sigint.recv() => info!("got SIGINT, exiting..."),
    };

    if shutdown_tx.send(true).is_err() {
        debug!("bridge tasks already stopped");
    }
    periodic.await?;
    relay.await?;

    accessory.disconnect().await?;
    info!("disconnected mqtt");

    Ok(())
}

async fn list() -> Result<()> {
    let host = Config::gateway_host_from_env()?;
    let gateway = Gateway::connect(&host)?;

    let heaters = list_heaters(&gateway).await.inspect_err(|err| {
        error!("Failed to communicate with incomfort gateway: {err}");
    })?;

    for heater in &heaters {
        println!("{}", describe(heater));
    }

    Ok(())
}

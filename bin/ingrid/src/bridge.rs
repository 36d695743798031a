use std::sync::Arc;
use std::time::Duration;

use incomfort::{Gateway, Heater, HeaterState, Transport};
use log::{debug, error, info};
use tokio::sync::{mpsc, watch, Mutex};
use tokio::time::{self, Instant, MissedTickBehavior};
use transport::{HeatingCoolingState, TargetMode};

use crate::{Accessory, Result};

/// Thermostat values derived from one heater snapshot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    pub target_temperature: f32,
    pub current_temperature: f32,
    pub heating_cooling_state: HeatingCoolingState,
    pub target_mode: TargetMode,
}

impl From<&HeaterState> for Projection {
    fn from(state: &HeaterState) -> Self {
        let heating_cooling_state = if state.is_burning {
            HeatingCoolingState::Heat
        } else {
            HeatingCoolingState::Off
        };

        Projection {
            target_temperature: state.setpoint_override,
            current_temperature: state.room_temperature,
            heating_cooling_state,
            // the boiler schedules itself
            target_mode: TargetMode::Auto,
        }
    }
}

/// Keeps the accessory in sync with the tracked heater and relays remote
/// setpoint changes back to the gateway.
pub struct Bridge<T, A> {
    gateway: Arc<Gateway<T>>,
    heater: Arc<Mutex<Heater>>,
    accessory: Arc<A>,
}

impl<T, A> Clone for Bridge<T, A> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            heater: self.heater.clone(),
            accessory: self.accessory.clone(),
        }
    }
}

impl<T, A> Bridge<T, A>
where
    T: Transport + 'static,
    A: Accessory + 'static,
{
    pub fn new(gateway: Gateway<T>, heater: Heater, accessory: A) -> Self {
        Self {
            gateway: Arc::new(gateway),
            heater: Arc::new(Mutex::new(heater)),
            accessory: Arc::new(accessory),
        }
    }

    pub fn heater(&self) -> Arc<Mutex<Heater>> {
        self.heater.clone()
    }

    /// Refreshes the heater and pushes the derived projection. Nothing is
    /// pushed when the refresh fails.
    pub async fn update(&self) -> Result<Projection> {
        let projection = {
            let mut heater = self.heater.lock().await;
            self.gateway.refresh(&mut heater).await?;

            let state = heater.state();
            info!(
                "{}: {} room {}°C, override {}°C, {}",
                heater.name(),
                state.display_label,
                state.room_temperature,
                state.setpoint_override,
                if state.is_burning { "burning" } else { "idle" }
            );

            Projection::from(state)
        };

        debug!("pushing {projection:?}");
        self.push(projection).await?;

        Ok(projection)
    }

    async fn push(&self, projection: Projection) -> Result<()> {
        self.accessory
            .set_target_temperature(projection.target_temperature)
            .await?;
        self.accessory
            .set_current_temperature(projection.current_temperature)
            .await?;
        self.accessory
            .set_heating_cooling_state(projection.heating_cooling_state)
            .await?;
        self.accessory
            .set_target_mode(projection.target_mode)
            .await?;

        Ok(())
    }

    /// Updates once immediately and then every `period` until `shutdown`
    /// flips to true or its sender is dropped.
    pub async fn run_periodic(self, period: Duration, mut shutdown: watch::Receiver<bool>) {
        if let Err(err) = self.update().await {
            error!("Error updating heater state: {err}");
        }

        let mut timer = time::interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = timer.tick() => {},
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("stopping periodic updates");
                        return;
                    }
                    continue;
                }
            }

            if let Err(err) = self.update().await {
                error!("Error updating heater state: {err}");
            }
        }
    }

    pub async fn set_temperature(&self, target: f32) -> Result<()> {
        let heater = self.heater.lock().await;
        self.gateway.set_temperature(&heater, target).await?;

        Ok(())
    }

    /// Forwards every remote target change to the gateway until the channel
    /// closes or `shutdown` flips to true. Failures are logged and the next
    /// change is processed. A write already sent to the gateway is finished
    /// before stopping.
    pub async fn relay_target_temperature(
        self,
        mut changes: mpsc::Receiver<f32>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            let target = tokio::select! {
                target = changes.recv() => match target {
                    Some(target) => target,
                    None => {
                        debug!("target temperature channel closed");
                        return;
                    }
                },
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("stopping setpoint relay");
                        return;
                    }
                    continue;
                }
            };

            info!("remote client wants {target}°C");

            if let Err(err) = self.set_temperature(target).await {
                error!("Error setting temperature {target}: {err}");
            }
        }
    }
}

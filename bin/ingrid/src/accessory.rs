use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::stream::StreamExt;
use log::{debug, error, info, trace};
use paho_mqtt::{AsyncClient as MqClient, Message, MessageBuilder, QOS_1};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time;
use transport::{Characteristic, HeatingCoolingState, TargetMode, Topic, TopicType};

use crate::Result;

/// Sink of the thermostat characteristics visible to smart-home clients.
#[async_trait]
pub trait Accessory: Send + Sync {
    async fn set_target_temperature(&self, value: f32) -> Result<()>;
    async fn set_current_temperature(&self, value: f32) -> Result<()>;
    async fn set_heating_cooling_state(&self, state: HeatingCoolingState) -> Result<()>;
    async fn set_target_mode(&self, mode: TargetMode) -> Result<()>;
}

#[derive(Clone)]
pub struct MqttThermostat {
    mqtt: MqClient,
    device: String,
}

impl MqttThermostat {
    pub fn new(mqtt: MqClient, device: String) -> Self {
        Self { mqtt, device }
    }

    async fn publish<T: Serialize>(&self, characteristic: Characteristic, value: T) -> Result<()> {
        let topic = Topic::state(&self.device, characteristic);
        let payload = serde_json::to_vec(&value)?;

        trace!("publish to {topic}: {}", String::from_utf8_lossy(&payload));

        let message = MessageBuilder::new()
            .topic(topic.to_string())
            .payload(payload)
            .qos(QOS_1)
            .retained(true)
            .finalize();

        self.mqtt.publish(message).await?;

        Ok(())
    }

    /// Subscribes to remote target temperature changes. The returned channel
    /// closes when the subscription task stops.
    pub async fn subscribe_target_temperature(&self) -> Result<mpsc::Receiver<f32>> {
        let mut mqtt = self.mqtt.clone();
        let stream = mqtt.get_stream(None);

        let topic = Topic::set(&self.device, Characteristic::TargetTemperature);
        mqtt.subscribe(topic.to_string(), QOS_1).await?;
        info!("Subscribed to topic: {topic}");

        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(async move {
            let mut stream = stream;

            while let Some(msg_opt) = stream.next().await {
                if let Some(msg) = msg_opt {
                    let Some(value) = parse_target_temperature(&msg) else {
                        continue;
                    };

                    if tx.send(value).await.is_err() {
                        debug!("target temperature receiver dropped");
                        break;
                    }
                } else {
                    error!("Lost MQTT connection. Attempting reconnect.");
                    while let Err(err) = mqtt.reconnect().await {
                        error!("Error MQTT reconnecting: {}", err);
                        time::sleep(Duration::from_secs(1)).await;
                    }

                    if let Err(err) = mqtt.subscribe(topic.to_string(), QOS_1).await {
                        error!("Error resubscribing to {topic}: {err}");
                    }
                }
            }
        });

        Ok(rx)
    }

    pub async fn disconnect(&self) -> Result<()> {
        self.mqtt.disconnect(None).await?;
        Ok(())
    }
}

#[async_trait]
impl Accessory for MqttThermostat {
    async fn set_target_temperature(&self, value: f32) -> Result<()> {
        self.publish(Characteristic::TargetTemperature, value).await
    }

    async fn set_current_temperature(&self, value: f32) -> Result<()> {
        self.publish(Characteristic::CurrentTemperature, value).await
    }

    async fn set_heating_cooling_state(&self, state: HeatingCoolingState) -> Result<()> {
        self.publish(Characteristic::CurrentHeatingCoolingState, state)
            .await
    }

    async fn set_target_mode(&self, mode: TargetMode) -> Result<()> {
        self.publish(Characteristic::TargetHeatingCoolingState, mode)
            .await
    }
}

fn parse_target_temperature(msg: &Message) -> Option<f32> {
    match Topic::from_str(msg.topic()) {
        Ok(Topic {
            topic_type: TopicType::Set,
            characteristic: Characteristic::TargetTemperature,
            ..
        }) => (),
        _ => {
            debug!("ignoring message on {}", msg.topic());
            return None;
        }
    }

    parse_temperature(msg.payload())
}

fn parse_temperature(payload: &[u8]) -> Option<f32> {
    match serde_json::from_slice::<f32>(payload) {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            error!("target temperature is not finite: {value}");
            None
        }
        Err(err) => {
            error!("unable to parse target temperature: {err}");
            error!("{}", String::from_utf8_lossy(payload));
            None
        }
    }
}

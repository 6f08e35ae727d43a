//! Raspberry Pi GPIO button adapter

use rppal::gpio::{Event, Gpio, InputPin, Trigger};

use crate::application::ports::{ButtonError, ButtonSource, PressHandler};
use crate::domain::timing::Duration;

/// Push button wired between a BCM pin and ground.
///
/// The pin uses the internal pull-up, so it idles high and a press pulls it
/// low. Debouncing is done by the GPIO driver.
pub struct GpioButton {
    bcm_pin: u8,
    // Dropping the pin cancels the interrupt
    pin: Option<InputPin>,
}

impl GpioButton {
    /// Create a button on BCM pin `bcm_pin`
    pub fn new(bcm_pin: u8) -> Self {
        Self { bcm_pin, pin: None }
    }
}

impl ButtonSource for GpioButton {
    fn watch(&mut self, debounce: Duration, on_press: PressHandler) -> Result<(), ButtonError> {
        if self.pin.is_some() {
            return Err(ButtonError::AlreadyWatching);
        }

        let gpio = Gpio::new().map_err(|e| ButtonError::Unavailable(e.to_string()))?;
        let mut pin = gpio
            .get(self.bcm_pin)
            .map_err(|e| ButtonError::PinSetup {
                pin: self.bcm_pin,
                message: e.to_string(),
            })?
            .into_input_pullup();

        pin.set_async_interrupt(
            Trigger::FallingEdge,
            Some(debounce.as_std()),
            move |_event: Event| on_press(),
        )
        .map_err(|e| ButtonError::WatchFailed(e.to_string()))?;

        self.pin = Some(pin);
        Ok(())
    }

    fn describe(&self) -> String {
        format!("GPIO BCM {}", self.bcm_pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_pin() {
        assert_eq!(GpioButton::new(4).describe(), "GPIO BCM 4");
    }

    #[test]
    #[ignore = "Requires Raspberry Pi GPIO"]
    fn can_watch_pin() {
        let mut button = GpioButton::new(4);
        let handler: PressHandler = std::sync::Arc::new(|| {});
        assert!(button.watch(Duration::from_millis(2000), handler.clone()).is_ok());
        assert!(matches!(
            button.watch(Duration::from_millis(2000), handler),
            Err(ButtonError::AlreadyWatching)
        ));
    }
}

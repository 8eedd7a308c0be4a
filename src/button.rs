// Debounced switch

use embassy_rp::gpio::{Input, Level};
use embassy_time::Timer;

use core::cell::{Cell, RefCell};

use crate::config::DEBOUNCE_TIME;
use crate::poll_loop::Switch;

/// Switch state is only updated while [`Button::task`] runs.
pub struct Button<'a> {
    pin: RefCell<Input<'a>>,
    active: Level,
    pressed: Cell<bool>,
    press_latched: Cell<bool>,
}

impl<'a> Button<'a> {
    /// `active` is the level the pin reads while the switch is closed; the pull
    /// on `pin` should hold it at the other level.
    pub fn new(mut pin: Input<'a>, active: Level) -> Self {
        pin.set_schmitt(true);
        let pressed = pin.get_level() == active;
        Self {
            pin: pin.into(),
            active,
            pressed: pressed.into(),
            press_latched: false.into(),
        }
    }
    /// Press seen since the last call.
    pub fn was_pressed(&self) -> bool {
        self.press_latched.replace(false)
    }
    fn settle(&self, pressed: bool) {
        let was = self.pressed.replace(pressed);
        if pressed && !was {
            self.press_latched.set(true);
        }
    }
    #[allow(clippy::await_holding_refcell_ref)]
    pub async fn task(&self) -> ! {
        let mut pin = self.pin.borrow_mut();
        self.settle(pin.get_level() == self.active);
        loop {
            pin.wait_for_any_edge().await;
            // sample once the contacts stop bouncing
            Timer::after(DEBOUNCE_TIME).await;
            self.settle(pin.get_level() == self.active);
        }
    }
}

impl Switch for Button<'_> {
    fn is_pressed(&self) -> bool {
        self.pressed.get()
    }
}

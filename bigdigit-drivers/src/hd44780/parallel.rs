//! Direct 4-bit parallel wiring
//!
//! RS, EN and D4-D7 on plain GPIO outputs. RW must be tied to ground;
//! the busy flag is never read, fixed delays are used instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use super::command::{Register, ENABLE_PULSE_US};
use super::DataBus;

/// HD44780 data bus on six GPIO pins
pub struct ParallelBus<P> {
    rs: P,
    en: P,
    /// D4, D5, D6, D7
    data: [P; 4],
}

impl<P: OutputPin> ParallelBus<P> {
    /// Create a parallel bus
    ///
    /// # Arguments
    /// - `rs`: Register select
    /// - `en`: Enable strobe
    /// - `data`: D4, D5, D6 and D7, in that order
    pub fn new(rs: P, en: P, data: [P; 4]) -> Self {
        Self { rs, en, data }
    }

    /// Give back the pins as (rs, en, data)
    pub fn release(self) -> (P, P, [P; 4]) {
        (self.rs, self.en, self.data)
    }
}

impl<P: OutputPin> DataBus for ParallelBus<P> {
    type Error = P::Error;

    fn write_nibble<D: DelayNs>(
        &mut self,
        nibble: u8,
        register: Register,
        delay: &mut D,
    ) -> Result<(), Self::Error> {
        self.rs
            .set_state(PinState::from(register == Register::Data))?;
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(PinState::from(nibble & (1 << bit) != 0))?;
        }

        // Data is latched on the falling edge
        self.en.set_high()?;
        delay.delay_us(ENABLE_PULSE_US);
        self.en.set_low()?;
        delay.delay_us(ENABLE_PULSE_US);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use heapless::Vec;

    const RS: u8 = 0;
    const EN: u8 = 1;

    type PinLog = RefCell<Vec<(u8, bool), 64>>;

    /// Mock pin that records every level change with its id
    struct MockPin<'a> {
        id: u8,
        log: &'a PinLog,
    }

    impl embedded_hal::digital::ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.id, false)).ok();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.id, true)).ok();
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn bus(log: &PinLog) -> ParallelBus<MockPin<'_>> {
        let pin = |id| MockPin { id, log };
        ParallelBus::new(pin(RS), pin(EN), [pin(2), pin(3), pin(4), pin(5)])
    }

    /// Replay the log and return what the controller latched
    fn latched(log: &PinLog) -> Vec<(bool, u8), 8> {
        let mut levels = [false; 6];
        let mut out = Vec::new();
        for &(id, high) in log.borrow().iter() {
            if id == EN && levels[EN as usize] && !high {
                let nibble = (0..4).fold(0u8, |acc, bit| {
                    acc | (u8::from(levels[2 + bit]) << bit)
                });
                out.push((levels[RS as usize], nibble)).ok();
            }
            levels[id as usize] = high;
        }
        out
    }

    #[test]
    fn test_instruction_nibble() {
        let log = RefCell::new(Vec::new());
        let mut bus = bus(&log);

        bus.write_nibble(0x0A, Register::Instruction, &mut NoDelay)
            .unwrap();

        assert_eq!(latched(&log).as_slice(), &[(false, 0x0A)]);
    }

    #[test]
    fn test_data_nibbles() {
        let log = RefCell::new(Vec::new());
        let mut bus = bus(&log);

        bus.write_nibble(0x03, Register::Data, &mut NoDelay).unwrap();
        bus.write_nibble(0x0C, Register::Data, &mut NoDelay).unwrap();

        assert_eq!(latched(&log).as_slice(), &[(true, 0x03), (true, 0x0C)]);
    }

    #[test]
    fn test_enable_ends_low() {
        let log = RefCell::new(Vec::new());
        let mut bus = bus(&log);

        bus.write_nibble(0x0F, Register::Instruction, &mut NoDelay)
            .unwrap();

        let last_en = log
            .borrow()
            .iter()
            .rev()
            .find(|&&(id, _)| id == EN)
            .copied();
        assert_eq!(last_en, Some((EN, false)));
    }
}

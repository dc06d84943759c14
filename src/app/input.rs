use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use cpim_core::config::Parameters;
use cpim_core::control::Command;
use cpim_data::InitialCondition;

use crate::app::state::App;

/// Slider step for the rate, coupling and field controls.
pub const RATE_STEP: f64 = 0.01;
pub const TEMPERATURE_FACTOR: f64 = 1.25;
pub const TEMPERATURE_RANGE: (f64, f64) = (0.001, 50.0);
pub const MAX_RADIUS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Command(Command),
    SelectInit(InitialCondition),
    Export,
    Quit,
    None,
}

/// Moves `value` by `delta` on a 0.01 grid inside `[lo, hi]`.
pub fn nudge(value: f64, delta: f64, lo: f64, hi: f64) -> f64 {
    let stepped = ((value + delta) / RATE_STEP).round() * RATE_STEP;
    stepped.clamp(lo, hi)
}

pub fn scale_temperature(value: f64, factor: f64) -> f64 {
    (value * factor).clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1)
}

pub fn next_radius(radius: u8) -> u8 {
    radius % MAX_RADIUS + 1
}

/// Maps a key press to an action given the current parameters.
pub fn action_for_key(key: KeyEvent, params: &Parameters, selected: InitialCondition) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    let p = params;
    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('e') => return KeyAction::Export,
        KeyCode::Char(c @ '1'..='5') => {
            let option = c as u8 - b'0';
            return InitialCondition::try_from(option).map_or(KeyAction::None, KeyAction::SelectInit);
        }
        KeyCode::Char('i') => Command::Init(selected),
        KeyCode::Char('s') => Command::Start,
        KeyCode::Char('p') => Command::Stop,
        KeyCode::Char('b') => Command::SetBirthRate(nudge(p.birth_rate, -RATE_STEP, 0.0, 1.0)),
        KeyCode::Char('B') => Command::SetBirthRate(nudge(p.birth_rate, RATE_STEP, 0.0, 1.0)),
        KeyCode::Char('d') => Command::SetDeathRate(nudge(p.death_rate, -RATE_STEP, 0.0, 1.0)),
        KeyCode::Char('D') => Command::SetDeathRate(nudge(p.death_rate, RATE_STEP, 0.0, 1.0)),
        KeyCode::Char('f') => Command::SetDifferentiationRate(nudge(
            p.differentiation_rate,
            -RATE_STEP,
            0.0,
            1.0,
        )),
        KeyCode::Char('F') => Command::SetDifferentiationRate(nudge(
            p.differentiation_rate,
            RATE_STEP,
            0.0,
            1.0,
        )),
        KeyCode::Char('t') => {
            Command::SetTemperature(scale_temperature(p.temperature, 1.0 / TEMPERATURE_FACTOR))
        }
        KeyCode::Char('T') => {
            Command::SetTemperature(scale_temperature(p.temperature, TEMPERATURE_FACTOR))
        }
        KeyCode::Char('j') => Command::SetCoupling(nudge(p.coupling, -RATE_STEP, -1.0, 1.0)),
        KeyCode::Char('J') => Command::SetCoupling(nudge(p.coupling, RATE_STEP, -1.0, 1.0)),
        KeyCode::Char('m') => Command::SetField(nudge(p.magnetic_field, -RATE_STEP, -1.0, 1.0)),
        KeyCode::Char('M') => Command::SetField(nudge(p.magnetic_field, RATE_STEP, -1.0, 1.0)),
        KeyCode::Char('r') => Command::SetNeighborhood(next_radius(p.neighborhood_radius)),
        _ => return KeyAction::None,
    };
    KeyAction::Command(command)
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        let params = *self.controller.simulation.params();
        match action_for_key(key, &params, self.selected_init) {
            KeyAction::Quit => self.running = false,
            KeyAction::Export => self.export_or_report(),
            KeyAction::SelectInit(initial) => {
                self.selected_init = initial;
                self.message = Some(format!(
                    "Init option {}: {}",
                    initial.option_number(),
                    initial.label()
                ));
            }
            KeyAction::Command(command) => {
                self.dispatch(command);
            }
            KeyAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_rate_keys_clamp_to_unit_interval() {
        let params = Parameters::default();
        assert_eq!(params.birth_rate, 1.0);
        assert_eq!(
            action_for_key(press('B'), &params, InitialCondition::default()),
            KeyAction::Command(Command::SetBirthRate(1.0))
        );
        match action_for_key(press('b'), &params, InitialCondition::default()) {
            KeyAction::Command(Command::SetBirthRate(v)) => assert!((v - 0.99).abs() < 1e-9),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_temperature_stays_in_range() {
        assert_eq!(scale_temperature(0.001, 0.8), TEMPERATURE_RANGE.0);
        assert_eq!(scale_temperature(45.0, 1.25), TEMPERATURE_RANGE.1);
        assert!((scale_temperature(1.0, 1.25) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_radius_cycles() {
        assert_eq!(next_radius(1), 2);
        assert_eq!(next_radius(2), 3);
        assert_eq!(next_radius(3), 1);
    }

    #[test]
    fn test_digit_selects_init_option() {
        let params = Parameters::default();
        assert_eq!(
            action_for_key(press('5'), &params, InitialCondition::default()),
            KeyAction::SelectInit(InitialCondition::FullUndifferentiated)
        );
        assert_eq!(
            action_for_key(press('i'), &params, InitialCondition::SpinBlock),
            KeyAction::Command(Command::Init(InitialCondition::SpinBlock))
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            action_for_key(key, &Parameters::default(), InitialCondition::default()),
            KeyAction::Quit
        );
    }
}

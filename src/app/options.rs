use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub reset_after_submit: bool,
    pub preferences_file: PathBuf,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_exit: true,
            show_help: true,
            reset_after_submit: false,
            preferences_file: PathBuf::from(".contentui-prefs.json"),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_reset_after_submit(mut self, reset: bool) -> Self {
        self.reset_after_submit = reset;
        self
    }

    pub fn with_preferences_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.preferences_file = file.into();
        self
    }
}

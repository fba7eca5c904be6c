use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Scancode),
    KeyUp(Scancode),
}

impl InputEvent {
    /// Map a raw SDL event. Escape counts as a quit request.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match *event {
            Event::Quit { .. } => Some(Self::Quit),
            Event::KeyDown {
                scancode: Some(sc), ..
            } => Some(Self::key_down(sc)),
            Event::KeyUp {
                scancode: Some(sc), ..
            } => Some(Self::KeyUp(sc)),
            _ => None,
        }
    }

    fn key_down(sc: Scancode) -> Self {
        if sc == Scancode::Escape {
            Self::Quit
        } else {
            Self::KeyDown(sc)
        }
    }
}

/// Events collected during one poll, in arrival order.
pub struct InputState {
    pub events: Vec<InputEvent>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();
        for event in event_pump.poll_iter() {
            if let Some(input) = InputEvent::from_sdl(&event) {
                self.push(input);
            }
        }
    }

    fn push(&mut self, event: InputEvent) {
        if event == InputEvent::Quit {
            self.quit = true;
        }
        self.events.push(event);
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

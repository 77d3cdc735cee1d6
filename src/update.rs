use iced::{window, Subscription, Task};
use log::{debug, info};

use crate::{
    input::{self, Action},
    message::Message,
    render,
    state::ViewerState,
};

pub fn init(state: ViewerState) -> (ViewerState, Task<Message>) {
    let size = window::get_latest().and_then(window::get_size).map(Message::Resized);
    let task = if state.fullscreen_on_start {
        size.chain(Task::done(Message::Input(Action::ToggleFullscreen)))
    } else {
        size
    };
    (state, task)
}

pub fn subscription(_state: &ViewerState) -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::Resized(size))
}

pub fn title(state: &ViewerState) -> String {
    format!(
        "{} on {} - Tile Viewer",
        state.pattern_name(),
        state.color_name()
    )
}

// The scale factor is re-read on every redraw, since the window may have moved
// to a display with a different density.
fn request_redraw() -> Task<Message> {
    window::get_latest()
        .and_then(window::get_scale_factor)
        .map(Message::ScaleFactor)
}

fn toggle_fullscreen() -> Task<Message> {
    window::get_latest()
        .and_then(|id| window::get_mode(id).map(move |mode| Message::WindowMode(id, mode)))
}

pub fn apply(state: &mut ViewerState, action: Action) -> Task<Message> {
    match action {
        Action::AdvancePattern(step) => {
            state.selection.advance_pattern(step);
            debug!(
                "Pattern {}/{}: '{}'",
                state.selection.pattern_idx + 1,
                state.selection.pattern_count(),
                state.pattern_name()
            );
        }
        Action::AdvanceColor(step) => {
            state.selection.advance_color(step);
            debug!("Color {}: {}", state.selection.color_idx, state.color_name());
        }
        Action::ToggleFullscreen => return toggle_fullscreen(),
        Action::Redraw => {}
        Action::Noop => return Task::none(),
    }
    request_redraw()
}

pub fn update(state: &mut ViewerState, message: Message) -> Task<Message> {
    match message {
        Message::Input(action) => return apply(state, action),
        Message::Resized(size) => {
            debug!("Surface resized to {}x{}", size.width, size.height);
            state.surface.size = size;
            return apply(state, input::on_resize().action);
        }
        Message::ScaleFactor(scale_factor) => {
            state.surface.scale_factor = scale_factor;
            let request = state.next_render_request();
            return Task::perform(render::paint(request), Message::Painted);
        }
        Message::WindowMode(id, mode) => {
            // The host may refuse the change; nothing is reported back either way.
            let next = match mode {
                window::Mode::Fullscreen => window::Mode::Windowed,
                _ => window::Mode::Fullscreen,
            };
            info!("Switching window mode to {:?}", next);
            return window::change_mode(id, next).chain(request_redraw());
        }
        Message::Painted(painted) => {
            if painted.generation < state.generation {
                debug!(
                    "Showing pattern #{} while #{} is still pending",
                    painted.generation, state.generation
                );
            }
            state.show(painted);
        }
    }
    Task::none()
}

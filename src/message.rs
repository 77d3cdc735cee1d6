use iced::{window, Size};

use crate::{input::Action, render::Painted};

#[derive(Debug, Clone)]
pub enum Message {
    Input(Action),
    Resized(Size),
    ScaleFactor(f32),
    WindowMode(window::Id, window::Mode),
    Painted(Painted),
}

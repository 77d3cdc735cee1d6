// Module for displaying the pattern and forwarding input on it
use iced::{
    mouse,
    widget::{canvas, image::FilterMethod},
    Element, Length, Point, Rectangle,
};

use crate::{
    input::{Action, InputState},
    message::Message,
    render::Painted,
    state::ViewerState,
};

struct PatternCanvas<'a> {
    painted: Option<&'a Painted>,
}

impl<'a> canvas::Program<Message> for PatternCanvas<'a> {
    type State = InputState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let Some(input) = state.decode(event, cursor.is_over(bounds)) else {
            return (canvas::event::Status::Ignored, None);
        };
        let dispatch = state.dispatch(input);
        let message = match dispatch.action {
            Action::Noop => None,
            action => Some(Message::Input(action)),
        };
        (dispatch.status(), message)
    }

    fn draw(
        &self,
        _state: &InputState,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        // Until the first image is ready the window stays blank.
        let Some(painted) = self.painted else {
            return vec![];
        };
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let image = iced::advanced::image::Image::new(painted.handle.clone())
            .filter_method(FilterMethod::Nearest);
        frame.draw_image(
            Rectangle::new(Point::ORIGIN, painted.logical_size()),
            image,
        );

        vec![frame.into_geometry()]
    }
}

pub fn view(state: &ViewerState) -> Element<Message> {
    canvas(PatternCanvas {
        painted: state.painted.as_ref(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

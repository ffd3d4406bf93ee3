use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Stack, container, mouse_area};
use iced::window::Direction;
use iced::{Element, Length, Theme, mouse};

const RESIZE_EDGE_THICKNESS: f32 = 6.0;
const RESIZE_CORNER_THICKNESS: f32 = 12.0;

/// Events emitted by the window resize grips.
#[derive(Debug, Clone)]
pub(crate) enum ResizeGripEvent {
    Resize(Direction),
}

/// Render the eight-directional window-resize grip overlays.
pub(crate) fn view() -> Element<'static, ResizeGripEvent, Theme, iced::Renderer>
{
    let grips = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    Stack::with_children(grips.into_iter().map(grip))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn grip(
    direction: Direction,
) -> Element<'static, ResizeGripEvent, Theme, iced::Renderer> {
    let (width, height, align_x, align_y, interaction) = match direction {
        Direction::North => (
            Length::Fill,
            Length::Fixed(RESIZE_EDGE_THICKNESS),
            Horizontal::Left,
            Vertical::Top,
            mouse::Interaction::ResizingVertically,
        ),
        Direction::South => (
            Length::Fill,
            Length::Fixed(RESIZE_EDGE_THICKNESS),
            Horizontal::Left,
            Vertical::Bottom,
            mouse::Interaction::ResizingVertically,
        ),
        Direction::East => (
            Length::Fixed(RESIZE_EDGE_THICKNESS),
            Length::Fill,
            Horizontal::Right,
            Vertical::Top,
            mouse::Interaction::ResizingHorizontally,
        ),
        Direction::West => (
            Length::Fixed(RESIZE_EDGE_THICKNESS),
            Length::Fill,
            Horizontal::Left,
            Vertical::Top,
            mouse::Interaction::ResizingHorizontally,
        ),
        Direction::NorthWest => corner(
            Horizontal::Left,
            Vertical::Top,
            mouse::Interaction::ResizingDiagonallyDown,
        ),
        Direction::NorthEast => corner(
            Horizontal::Right,
            Vertical::Top,
            mouse::Interaction::ResizingDiagonallyUp,
        ),
        Direction::SouthWest => corner(
            Horizontal::Left,
            Vertical::Bottom,
            mouse::Interaction::ResizingDiagonallyUp,
        ),
        Direction::SouthEast => corner(
            Horizontal::Right,
            Vertical::Bottom,
            mouse::Interaction::ResizingDiagonallyDown,
        ),
    };

    let handle = mouse_area(container("").width(width).height(height))
        .on_press(ResizeGripEvent::Resize(direction))
        .interaction(interaction);

    container(handle)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}

fn corner(
    align_x: Horizontal,
    align_y: Vertical,
    interaction: mouse::Interaction,
) -> (Length, Length, Horizontal, Vertical, mouse::Interaction) {
    (
        Length::Fixed(RESIZE_CORNER_THICKNESS),
        Length::Fixed(RESIZE_CORNER_THICKNESS),
        align_x,
        align_y,
        interaction,
    )
}

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, Stack, container, mouse_area};
use iced::window::Direction;
use iced::{Element, Length, mouse};

const EDGE_THICKNESS: f32 = 6.0;
const CORNER_THICKNESS: f32 = 12.0;

/// Events emitted by the window resize grips.
#[derive(Debug, Clone)]
pub(crate) enum ResizeGripEvent {
    Resize(Direction),
}

/// Placement of one grip along the window border.
#[derive(Debug, Clone, Copy)]
struct Grip {
    direction: Direction,
    align_x: Horizontal,
    align_y: Vertical,
    width: Length,
    height: Length,
    interaction: mouse::Interaction,
}

/// Edges first so corners are stacked above them.
const GRIPS: [Grip; 8] = [
    edge(Direction::North, Horizontal::Left, Vertical::Top, false),
    edge(Direction::South, Horizontal::Left, Vertical::Bottom, false),
    edge(Direction::East, Horizontal::Right, Vertical::Top, true),
    edge(Direction::West, Horizontal::Left, Vertical::Top, true),
    corner(
        Direction::NorthWest,
        Horizontal::Left,
        Vertical::Top,
        mouse::Interaction::ResizingDiagonallyDown,
    ),
    corner(
        Direction::NorthEast,
        Horizontal::Right,
        Vertical::Top,
        mouse::Interaction::ResizingDiagonallyUp,
    ),
    corner(
        Direction::SouthWest,
        Horizontal::Left,
        Vertical::Bottom,
        mouse::Interaction::ResizingDiagonallyUp,
    ),
    corner(
        Direction::SouthEast,
        Horizontal::Right,
        Vertical::Bottom,
        mouse::Interaction::ResizingDiagonallyDown,
    ),
];

const fn edge(
    direction: Direction,
    align_x: Horizontal,
    align_y: Vertical,
    vertical: bool,
) -> Grip {
    if vertical {
        Grip {
            direction,
            align_x,
            align_y,
            width: Length::Fixed(EDGE_THICKNESS),
            height: Length::Fill,
            interaction: mouse::Interaction::ResizingHorizontally,
        }
    } else {
        Grip {
            direction,
            align_x,
            align_y,
            width: Length::Fill,
            height: Length::Fixed(EDGE_THICKNESS),
            interaction: mouse::Interaction::ResizingVertically,
        }
    }
}

const fn corner(
    direction: Direction,
    align_x: Horizontal,
    align_y: Vertical,
    interaction: mouse::Interaction,
) -> Grip {
    Grip {
        direction,
        align_x,
        align_y,
        width: Length::Fixed(CORNER_THICKNESS),
        height: Length::Fixed(CORNER_THICKNESS),
        interaction,
    }
}

/// Render the eight-directional resize overlay for the undecorated window.
pub(crate) fn view() -> Element<'static, ResizeGripEvent> {
    GRIPS
        .iter()
        .fold(Stack::new(), |stack, grip| {
            let area = mouse_area(
                Space::new().width(grip.width).height(grip.height),
            )
            .on_press(ResizeGripEvent::Resize(grip.direction))
            .interaction(grip.interaction);

            stack.push(
                container(area)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(grip.align_x)
                    .align_y(grip.align_y),
            )
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use iced::Length;
    use iced::window::Direction;

    use super::GRIPS;

    #[test]
    fn given_grip_table_when_inspected_then_every_direction_appears_once() {
        let checks: [(&str, fn(&Direction) -> bool); 8] = [
            ("north", |d| matches!(d, Direction::North)),
            ("south", |d| matches!(d, Direction::South)),
            ("east", |d| matches!(d, Direction::East)),
            ("west", |d| matches!(d, Direction::West)),
            ("north-west", |d| matches!(d, Direction::NorthWest)),
            ("north-east", |d| matches!(d, Direction::NorthEast)),
            ("south-west", |d| matches!(d, Direction::SouthWest)),
            ("south-east", |d| matches!(d, Direction::SouthEast)),
        ];

        for (name, is_direction) in checks {
            let count = GRIPS
                .iter()
                .filter(|grip| is_direction(&grip.direction))
                .count();
            assert_eq!(count, 1, "{name}");
        }
    }

    #[test]
    fn given_side_edges_when_inspected_then_they_span_full_height() {
        for grip in GRIPS.iter().filter(|grip| {
            matches!(grip.direction, Direction::East | Direction::West)
        }) {
            assert_eq!(grip.height, Length::Fill);
        }
    }
}

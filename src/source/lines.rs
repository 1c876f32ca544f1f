//! Vertex extraction for straight-line path data.
//!
//! Understands `M`, `L`, `H`, `V` and `Z` only. Lowercase commands are
//! read as absolute. Any other command letter ends the current command,
//! and its numbers are skipped.

use std::sync::OnceLock;

use kurbo::Point;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    MoveTo,
    LineTo,
    Horizontal,
    Vertical,
}

static TOKEN: OnceLock<Regex> = OnceLock::new();

fn tokenize(data: &str) -> impl Iterator<Item = Token> + '_ {
    let re = TOKEN.get_or_init(|| {
        Regex::new(r"[A-Za-z]|[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("token regex must compile")
    });
    re.find_iter(data).filter_map(|m| {
        let s = m.as_str();
        match s.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Some(Token::Command(c)),
            _ => s.parse().ok().map(Token::Number),
        }
    })
}

/// Vertices visited by the line commands in `data`, in drawing order.
///
/// `Z` emits the start of the current subpath again, closing the outline.
pub fn extract(data: &str) -> Vec<Point> {
    let mut points = Vec::new();
    let mut command: Option<Command> = None;
    let mut current = Point::ZERO;
    let mut subpath_start: Option<Point> = None;
    let mut new_subpath = false;
    let mut pending_x: Option<f64> = None;
    let mut skipped = 0usize;

    for token in tokenize(data) {
        match token {
            Token::Command(c) => {
                pending_x = None;
                command = match c.to_ascii_uppercase() {
                    'M' => {
                        new_subpath = true;
                        Some(Command::MoveTo)
                    }
                    'L' => Some(Command::LineTo),
                    'H' => Some(Command::Horizontal),
                    'V' => Some(Command::Vertical),
                    'Z' => {
                        if let Some(start) = subpath_start {
                            current = start;
                            points.push(current);
                        }
                        None
                    }
                    _ => {
                        skipped += 1;
                        None
                    }
                };
            }
            Token::Number(n) => match command {
                Some(Command::MoveTo) | Some(Command::LineTo) => match pending_x.take() {
                    None => pending_x = Some(n),
                    Some(x) => {
                        current = Point::new(x, n);
                        if new_subpath || subpath_start.is_none() {
                            subpath_start = Some(current);
                            new_subpath = false;
                        }
                        points.push(current);
                    }
                },
                Some(Command::Horizontal) => {
                    current.x = n;
                    points.push(current);
                }
                Some(Command::Vertical) => {
                    current.y = n;
                    points.push(current);
                }
                None => {}
            },
        }
    }

    if skipped > 0 {
        log::warn!("skipped {} unsupported path command(s)", skipped);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        let tokens: Vec<Token> = tokenize("M1,-2.5l.5e1 3Z").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Command('M'),
                Token::Number(1.0),
                Token::Number(-2.5),
                Token::Command('l'),
                Token::Number(5.0),
                Token::Number(3.0),
                Token::Command('Z'),
            ]
        );
    }

    #[test]
    fn square_with_close() {
        let pts = extract("M0 0 L10 0 L10 10 L0 10 Z");
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[4], Point::new(0.0, 0.0));
    }

    #[test]
    fn horizontal_and_vertical() {
        let pts = extract("M 2 3 H 8 V 9 h 2 Z");
        assert_eq!(
            pts,
            vec![
                Point::new(2.0, 3.0),
                Point::new(8.0, 3.0),
                Point::new(8.0, 9.0),
                Point::new(2.0, 9.0),
                Point::new(2.0, 3.0),
            ]
        );
    }

    #[test]
    fn implicit_line_after_move() {
        let pts = extract("M0,0 5,0 5,5");
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(5.0, 5.0)]);
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let pts = extract("M0 0 L1 0 Z M5 5 L6 5 Z");
        assert_eq!(pts.last(), Some(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn curves_are_skipped() {
        let pts = extract("M0 0 C 1 1 2 2 3 3 L4 4");
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)]);
    }

    #[test]
    fn empty_and_garbage() {
        assert!(extract("").is_empty());
        assert!(extract("Z 1 2").is_empty());
    }
}

//! Built-in turtle and control commands.

/// A built-in command of the language.
///
/// The set is open: a new command needs a variant here plus spellings in
/// each locale's alias entries, never a scanner change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Move the turtle forward.
    Forward,
    /// Move the turtle backward.
    Back,
    /// Turn counterclockwise.
    Left,
    /// Turn clockwise.
    Right,
    /// Lift the pen; movement stops drawing.
    PenUp,
    /// Lower the pen; movement draws again.
    PenDown,
    /// Run a bracketed block a number of times.
    Repeat,
    /// Wipe the canvas and recenter the turtle.
    ClearScreen,
    /// Open a procedure definition.
    To,
    /// Close a procedure definition.
    End,
    /// Conditional execution of a bracketed block.
    If,
    /// Return early from the current procedure.
    Stop,
    /// Change the pen color.
    SetPenColor,
    /// Change the canvas background color.
    SetBackground,
}

impl Primitive {
    /// Canonical lowercase name, used in token dumps and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Forward => "forward",
            Primitive::Back => "back",
            Primitive::Left => "left",
            Primitive::Right => "right",
            Primitive::PenUp => "penup",
            Primitive::PenDown => "pendown",
            Primitive::Repeat => "repeat",
            Primitive::ClearScreen => "clearscreen",
            Primitive::To => "to",
            Primitive::End => "end",
            Primitive::If => "if",
            Primitive::Stop => "stop",
            Primitive::SetPenColor => "setpencolor",
            Primitive::SetBackground => "setbackground",
        }
    }
}

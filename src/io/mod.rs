/*!
# IO

Utilities for reading and writing flow problems from and to different file formats.

## Input Formats

Currently supported input formats:
- **Dimacs**: The DIMACS max-flow format listing the problem size, the two terminals and all arcs
  with their capacities.

## Output Formats

For writing problems, in addition to the above formats, the following is supported:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).
  Edges are labelled with their capacity or, if a flow is provided, with `flow/capacity`.

Computed flows can be written in the DIMACS solution format via [`DimacsWriter::try_write_solution`].

## Traits

To generalize over reading/writing:
- [`ProblemReader`] and [`ProblemWriter`] are implemented by readers and writers for a specific format.
- [`ProblemRead`] and [`ProblemWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod dimacs;
pub mod dot;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use dimacs::*;
pub use dot::*;

/// Identifier for a problem file format.
///
/// Used in [`ProblemRead`] and [`ProblemWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DIMACS max-flow format
    Dimacs,
    /// DOT language of GraphViz
    Dot,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dimacs" | "max" => Ok(FileFormat::Dimacs),
            "dot" => Ok(FileFormat::Dot),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can read flow problems in a specific format.
pub trait ProblemReader<N> {
    /// Reads a problem from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a flow problem in the expected format.
    fn try_read_problem<R>(&self, reader: R) -> Result<FlowProblem<N>>
    where
        R: BufRead;

    /// Reads a problem from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a flow problem.
    fn try_read_problem_file<P>(&self, path: P) -> Result<FlowProblem<N>>
    where
        P: AsRef<Path>,
    {
        self.try_read_problem(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write flow problems in a specific format.
pub trait ProblemWriter<N> {
    /// Writes the given problem to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_problem<W>(&self, problem: &FlowProblem<N>, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given problem to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_problem_file<P>(&self, problem: &FlowProblem<N>, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_problem(problem, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading problems when only a [`FileFormat`] is known.
pub trait ProblemRead: Sized {
    /// Reads a problem from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format is unsupported for reading
    /// or if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a problem from the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the input
    /// is invalid for the chosen format.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<N> ProblemRead for FlowProblem<N>
where
    N: GraphFromScratch + ResidualNetwork,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Dimacs => Self::try_read_dimacs(reader),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("{format:?} does not support ProblemRead")
            )),
        }
    }
}

/// Trait for writing problems when only a [`FileFormat`] is known.
pub trait ProblemWrite {
    /// Writes the problem to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the problem to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<N> ProblemWrite for FlowProblem<N>
where
    N: ResidualNetwork,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Dimacs => self.try_write_dimacs(writer),
            FileFormat::Dot => self.try_write_dot(writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {next:?} found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn file_format() {
        assert_eq!("DIMACS".parse::<FileFormat>().unwrap(), FileFormat::Dimacs);
        assert_eq!("dot".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!(
            "metis".parse::<FileFormat>().unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn dispatch() {
        let problem = FlowProblem::new(
            FlowArray::from_edges(3, [(0, 1, 2), (1, 2, 1)]).unwrap(),
            Terminals::FirstAndLast,
        )
        .unwrap();

        let mut buffer = Vec::new();
        problem
            .try_write_to_writer(&mut buffer, FileFormat::Dimacs)
            .unwrap();

        let read: FlowProblem<FlowMatrix> =
            FlowProblem::try_from_reader(Cursor::new(&buffer), FileFormat::Dimacs).unwrap();
        assert_eq!(read.network().capacity_of(0, 1), 2);
        assert_eq!((read.source(), read.sink()), (0, 2));

        assert_eq!(
            FlowProblem::<FlowMatrix>::try_from_reader(Cursor::new(&buffer), FileFormat::Dot)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidInput
        );
    }
}

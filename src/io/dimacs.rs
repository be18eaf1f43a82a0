/*!
# Dimacs

This module provides readers and writers for the **DIMACS max-flow format**.

A problem file consists of
- a **problem line** `p max <n> <m>` specifying the number of nodes and arcs,
- two **node designators** `n <id> s` and `n <id> t` naming source and sink,
- `m` **arc lines** `a <u> <v> <capacity>`.

Node ids are `1`-indexed in the file and `0`-indexed in memory. Lines starting with a configurable
**comment identifier** (default: `"c"`) as well as empty lines are ignored. Designators and arcs
may appear in any order after the problem line. Repeated arcs overwrite earlier capacities.

A solution file consists of a line `s <total>` followed by one line `f <u> <v> <flow>` per arc.

# Examples

```
use uflow::{prelude::*, io::*};
use std::io::Cursor;

let data = b"c tiny\np max 3 2\nn 1 s\nn 3 t\na 1 2 5\na 2 3 4\n";
let mut problem: FlowProblem<FlowArray> =
    DimacsReader::new().try_read_problem(Cursor::new(&data[..])).unwrap();

let result = problem.solve().unwrap();
assert_eq!(result.total_flow(), 4);

let mut buffer = Vec::new();
DimacsWriter::new().try_write_solution(&result, &mut buffer).unwrap();
assert_eq!(String::from_utf8(buffer).unwrap(), "s 4\nf 1 2 4\nf 2 3 4\n");
```
*/

use itertools::Itertools;

use super::*;
use crate::algo::FlowResult;

/// A configurable reader for the **DIMACS max-flow format**.
#[derive(Debug, Clone)]
pub struct DimacsReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for DimacsReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl DimacsReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the identifier used for detecting comment lines.
    ///
    /// Default is `"c"`.
    pub fn set_comment_identifier<S>(&mut self, c: S)
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.set_comment_identifier(c);
        self
    }
}

/// Converts a `1`-indexed node id of the file into a node
fn parse_node(id: Node, n: NumNodes) -> Result<Node> {
    raise_error_unless!(
        (1..=n).contains(&id),
        ErrorKind::InvalidData,
        format!("Node {id} out of range 1..={n}")
    );
    Ok(id - 1)
}

impl<N> ProblemReader<N> for DimacsReader
where
    N: GraphFromScratch + ResidualNetwork,
{
    fn try_read_problem<R>(&self, reader: R) -> Result<FlowProblem<N>>
    where
        R: BufRead,
    {
        let mut network: Option<N> = None;
        let mut expected_arcs: NumEdges = 0;
        let mut num_arcs: NumEdges = 0;
        let mut source: Option<Node> = None;
        let mut sink: Option<Node> = None;

        for line in reader.lines() {
            let line = line?;
            if line.starts_with(self.comment_identifier.as_str()) {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(kind) = parts.next() else {
                continue;
            };

            if kind == "p" {
                raise_error_unless!(
                    network.is_none(),
                    ErrorKind::InvalidData,
                    "Duplicate problem line"
                );

                let problem: String = parse_next_value!(parts, "problem type");
                raise_error_unless!(
                    problem == "max",
                    ErrorKind::InvalidData,
                    format!("Expected a max-flow problem, found {problem}")
                );

                let n: NumNodes = parse_next_value!(parts, "number of nodes");
                expected_arcs = parse_next_value!(parts, "number of arcs");
                network = Some(N::new(n)?);
                continue;
            }

            let Some(network) = network.as_mut() else {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Found {kind:?}-line before the problem line")
                ));
            };
            let n = network.number_of_nodes();

            match kind {
                "n" => {
                    let u = parse_node(parse_next_value!(parts, "node id"), n)?;
                    let designator: String = parse_next_value!(parts, "node designator");
                    let terminal = match designator.as_str() {
                        "s" => &mut source,
                        "t" => &mut sink,
                        _ => {
                            return Err(io_error!(
                                ErrorKind::InvalidData,
                                format!("Unknown node designator {designator:?}")
                            ));
                        }
                    };
                    raise_error_unless!(
                        terminal.replace(u).is_none(),
                        ErrorKind::InvalidData,
                        format!("Duplicate node designator {designator:?}")
                    );
                }
                "a" => {
                    let u = parse_node(parse_next_value!(parts, "tail"), n)?;
                    let v = parse_node(parse_next_value!(parts, "head"), n)?;
                    let capacity: Capacity = parse_next_value!(parts, "capacity");
                    network.set_edge(u, v, capacity)?;
                    num_arcs += 1;
                }
                _ => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        format!("Unknown line type {kind:?}")
                    ));
                }
            }
        }

        let Some(network) = network else {
            return Err(io_error!(ErrorKind::InvalidData, "Problem line not found"));
        };
        raise_error_unless!(
            num_arcs == expected_arcs,
            ErrorKind::InvalidData,
            format!("Expected {expected_arcs} arcs, found {num_arcs}")
        );
        let (Some(source), Some(sink)) = (source, sink) else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                "Source or sink designator missing"
            ));
        };

        Ok(FlowProblem::new(
            network,
            Terminals::Explicit { source, sink },
        )?)
    }
}

/// Trait for creating flow problems from the **DIMACS format**.
/// Shorthand for default settings.
pub trait DimacsRead: Sized {
    /// Tries to read a problem from a given buffered reader
    fn try_read_dimacs<R>(reader: R) -> Result<Self>
    where
        R: BufRead;

    /// Tries to read a problem from a file
    fn try_read_dimacs_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_dimacs(BufReader::new(File::open(path)?))
    }
}

impl<N> DimacsRead for FlowProblem<N>
where
    N: GraphFromScratch + ResidualNetwork,
{
    fn try_read_dimacs<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        DimacsReader::default().try_read_problem(reader)
    }
}

/// A writer for DIMACS problems and solutions
#[derive(Debug, Clone, Default)]
pub struct DimacsWriter {
    /// Optional comment written as first line
    comment: Option<String>,
}

impl DimacsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a comment that is written in front of the problem line
    pub fn set_comment<S>(&mut self, comment: S)
    where
        S: Into<String>,
    {
        self.comment = Some(comment.into());
    }

    /// Chainable version of [`Self::set_comment`]
    pub fn comment<S>(mut self, comment: S) -> Self
    where
        S: Into<String>,
    {
        self.set_comment(comment);
        self
    }

    /// Writes a computed flow in the DIMACS solution format.
    /// Every arc with positive capacity is listed, including those without flow.
    pub fn try_write_solution<W>(&self, result: &FlowResult, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        if let Some(comment) = &self.comment {
            writeln!(writer, "c {comment}")?;
        }

        writeln!(writer, "s {}", result.total_flow())?;
        for e in result.edge_flows() {
            writeln!(writer, "f {} {} {}", e.edge.0 + 1, e.edge.1 + 1, e.flow)?;
        }
        Ok(())
    }
}

impl<N> ProblemWriter<N> for DimacsWriter
where
    N: ResidualNetwork,
{
    fn try_write_problem<W>(&self, problem: &FlowProblem<N>, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let network = problem.network();

        if let Some(comment) = &self.comment {
            writeln!(writer, "c {comment}")?;
        }

        writeln!(
            writer,
            "p max {} {}",
            network.number_of_nodes(),
            network.number_of_edges()
        )?;
        writeln!(writer, "n {} s", problem.source() + 1)?;
        writeln!(writer, "n {} t", problem.sink() + 1)?;

        for CapacitatedEdge {
            edge: Edge(u, v),
            capacity,
        } in network.edges().sorted_unstable()
        {
            writeln!(writer, "a {} {} {capacity}", u + 1, v + 1)?;
        }
        Ok(())
    }
}

/// Trait for writing a problem in the **DIMACS format**.
/// Shorthand for default settings.
pub trait DimacsWrite {
    /// Tries to write the problem to a writer
    fn try_write_dimacs<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the problem to a file
    fn try_write_dimacs_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_dimacs(BufWriter::new(File::create(path)?))
    }
}

impl<N> DimacsWrite for FlowProblem<N>
where
    N: ResidualNetwork,
{
    fn try_write_dimacs<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DimacsWriter::default().try_write_problem(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const INSTANCE: &str = "c scenario with four nodes
p max 4 5
n 1 s
n 4 t
a 1 2 3
a 1 3 2
a 2 3 1
a 2 4 2
a 3 4 3
";

    fn read<N>(data: &str) -> Result<FlowProblem<N>>
    where
        N: GraphFromScratch + ResidualNetwork,
    {
        FlowProblem::try_read_dimacs(Cursor::new(data.as_bytes()))
    }

    #[test]
    fn read_instance() {
        let mut problem: FlowProblem<FlowMatrix> = read(INSTANCE).unwrap();
        assert_eq!(problem.network().number_of_nodes(), 4);
        assert_eq!(problem.network().number_of_edges(), 5);
        assert_eq!((problem.source(), problem.sink()), (0, 3));
        assert_eq!(problem.network().capacity_of(1, 3), 2);
        assert_eq!(problem.solve().unwrap().total_flow(), 4);
    }

    #[test]
    fn write_instance() {
        let problem: FlowProblem<FlowArray> = read(INSTANCE).unwrap();
        let mut buffer = Vec::new();
        DimacsWriter::new()
            .comment("scenario with four nodes")
            .try_write_problem(&problem, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), INSTANCE);
    }

    #[test]
    fn custom_comments_and_whitespace() {
        let data = "% header\n\np   max 2 1\n  n 2 t\nn 1 s\na 1 2   7\n";
        let problem: FlowProblem<FlowArray> = DimacsReader::new()
            .comment_identifier("%")
            .try_read_problem(Cursor::new(data.as_bytes()))
            .unwrap();
        assert_eq!(problem.network().capacity_of(0, 1), 7);
    }

    #[test]
    fn solution() {
        let mut problem: FlowProblem<FlowArray> = read(INSTANCE).unwrap();
        let result = problem.solve().unwrap();

        let mut buffer = Vec::new();
        DimacsWriter::new()
            .try_write_solution(&result, &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("s 4"));
        let flows: Vec<(Node, Node, Flow)> = lines
            .map(|line| {
                let (_, u, v, f) = line.split(' ').collect_tuple().unwrap();
                (u.parse().unwrap(), v.parse().unwrap(), f.parse().unwrap())
            })
            .collect();
        assert_eq!(flows.len(), 5);
        assert_eq!(flows.iter().filter(|f| f.1 == 4).map(|f| f.2).sum::<Flow>(), 4);
    }

    #[test]
    fn oversized_dense_network() {
        let err = read::<FlowMatrix>("p max 200000 0\nn 1 s\nn 2 t\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        // sparse networks of that size are fine
        let problem = read::<FlowArray>("p max 200000 0\nn 1 s\nn 2 t\n").unwrap();
        assert_eq!(problem.network().number_of_nodes(), 200_000);
    }

    #[test]
    fn malformed_input() {
        for data in [
            "",
            "c only comments\n",
            "p min 2 1\nn 1 s\nn 2 t\na 1 2 1\n",
            "p max 2\n",
            "p max 2 1\np max 2 1\n",
            "n 1 s\np max 2 1\n",
            "p max 2 1\nn 1 s\nn 2 t\n",
            "p max 2 1\nn 1 s\na 1 2 1\n",
            "p max 2 1\nn 1 s\nn 1 s\nn 2 t\na 1 2 1\n",
            "p max 2 1\nn 1 x\nn 2 t\na 1 2 1\n",
            "p max 2 1\nn 1 s\nn 2 t\na 1 3 1\n",
            "p max 2 1\nn 1 s\nn 2 t\na 0 2 1\n",
            "p max 2 1\nn 1 s\nn 2 t\na 1 2 -1\n",
            "p max 2 1\nn 1 s\nn 2 t\na 1 1 1\n",
            "p max 2 1\nn 1 s\nn 2 t\na 1 2 x\n",
            "p max 2 1\nn 1 s\nn 1 t\na 1 2 1\n",
            "p max 0 0\n",
            "p max 2 1\nn 1 s\nn 2 t\nb 1 2 1\n",
        ] {
            let err = read::<FlowArray>(data).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{data:?}");
        }
    }
}

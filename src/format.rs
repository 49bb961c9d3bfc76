//! Plain text encoding of device networks.
//!
//! The first line holds the number of devices. Every following line holds
//! one link as `u,v,speed`, with `u < v` and links in ascending order:
//!
//! ```text
//! 4
//! 0,1,2
//! 0,3,8
//! 1,2,4
//! 2,3,1
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::{DeviceGraph, GraphError, NodeIndex, SpeedClass};

/// Writes `graph` to `writer` in the text format.
pub fn write_network<W: Write>(graph: &DeviceGraph, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", graph.node_count())?;
    for (edge, speed) in graph.links() {
        write!(writer, "\n{},{},{}", edge.low(), edge.high(), speed)?;
    }
    Ok(())
}

/// Encodes `graph` in the text format.
pub fn to_text(graph: &DeviceGraph) -> String {
    let mut buf = Vec::new();
    write_network(graph, &mut buf).expect("writing to a Vec never fails");
    String::from_utf8(buf).expect("the text format is ASCII")
}

/// Writes `graph` to the file at `path`, replacing its contents.
pub fn write_network_file(path: impl AsRef<Path>, graph: &DeviceGraph) -> Result<(), FormatError> {
    fs::write(path, to_text(graph))?;
    Ok(())
}

/// Reads the network stored in the file at `path`.
pub fn read_network(path: impl AsRef<Path>) -> Result<DeviceGraph, FormatError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_network(&text)?)
}

/// Decodes a network from the text format.
///
/// Blank lines are skipped and whitespace around fields is ignored. Links
/// may be given in either orientation and in any order.
///
/// # Example
///
/// ```
/// # use devnet::format::parse_network;
/// # use devnet::{NodeIndex, SpeedClass};
/// let graph = parse_network("3\n0,1,2\n2,1,8").unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(
///     graph.speed(NodeIndex::new(1), NodeIndex::new(2)),
///     Some(SpeedClass::TenMegabit)
/// );
/// ```
pub fn parse_network(text: &str) -> Result<DeviceGraph, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(ParseError {
            line: 1,
            kind: ParseErrorKind::MissingHeader,
        });
    };
    let node_count: usize = parse_field(header, header_line)?;
    if node_count.saturating_sub(1) > NodeIndex::MAX {
        return Err(ParseError {
            line: header_line,
            kind: ParseErrorKind::TooManyDevices { node_count },
        });
    }

    let mut graph = DeviceGraph::new(node_count);
    for (line, content) in lines {
        let fields: Vec<&str> = content.split(',').map(str::trim).collect();
        let &[a, b, speed] = fields.as_slice() else {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::FieldCount {
                    found: fields.len(),
                },
            });
        };
        let a = parse_node(a, line, node_count)?;
        let b = parse_node(b, line, node_count)?;
        let value: u8 = parse_field(speed, line)?;
        let speed = SpeedClass::try_from(value).map_err(|_| ParseError {
            line,
            kind: ParseErrorKind::UnknownSpeed { value },
        })?;
        graph.add_link(a, b, speed).map_err(|err| ParseError {
            line,
            kind: ParseErrorKind::Graph(err),
        })?;
    }
    Ok(graph)
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize) -> Result<T, ParseError> {
    field.parse().map_err(|_| ParseError {
        line,
        kind: ParseErrorKind::InvalidNumber {
            field: field.to_owned(),
        },
    })
}

fn parse_node(field: &str, line: usize, node_count: usize) -> Result<NodeIndex, ParseError> {
    let index: usize = parse_field(field, line)?;
    if index >= node_count {
        return Err(ParseError {
            line,
            kind: ParseErrorKind::UnknownDevice { index, node_count },
        });
    }
    Ok(NodeIndex::new(index))
}

/// Error encountered while decoding a network, with the 1-based line it
/// occurred on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// Line of the input the error was found on.
    pub line: usize,
    /// What went wrong.
    #[source]
    pub kind: ParseErrorKind,
}

/// The kinds of [`ParseError`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input holds no device count.
    #[error("missing device count")]
    MissingHeader,
    /// A field is not a non-negative integer of the expected size.
    #[error("invalid number '{field}'")]
    InvalidNumber {
        /// The offending field.
        field: String,
    },
    /// The device count exceeds what a `NodeIndex` can address.
    #[error("too many devices: {node_count}")]
    TooManyDevices {
        /// The declared device count.
        node_count: usize,
    },
    /// A link endpoint is not below the device count.
    #[error("unknown device {index} in a network of {node_count} devices")]
    UnknownDevice {
        /// The offending endpoint.
        index: usize,
        /// The declared device count.
        node_count: usize,
    },
    /// A link line does not have three fields.
    #[error("expected 3 comma separated fields, found {found}")]
    FieldCount {
        /// Number of fields on the line.
        found: usize,
    },
    /// The speed is not one of 1, 2, 4 or 8.
    #[error("unknown speed class {value}")]
    UnknownSpeed {
        /// The offending value.
        value: u8,
    },
    /// The link is invalid for the network.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Error reading or writing a network file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The file could not be read or written.
    #[error("network file I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The file contents are not a valid network.
    #[error("invalid network file: {0}")]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod test {
    use super::*;

    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[fixture]
    fn network() -> DeviceGraph {
        let mut graph = DeviceGraph::new(4);
        graph.add_link(n(2), n(1), SpeedClass::HundredMegabit).unwrap();
        graph.add_link(n(0), n(1), SpeedClass::Gigabit).unwrap();
        graph.add_link(n(3), n(0), SpeedClass::TenMegabit).unwrap();
        graph.add_link(n(2), n(3), SpeedClass::TenGigabit).unwrap();
        graph
    }

    #[rstest]
    fn text_encoding(network: DeviceGraph) {
        insta::assert_snapshot!(to_text(&network), @r"
        4
        0,1,2
        0,3,8
        1,2,4
        2,3,1
        ");
    }

    #[rstest]
    fn parse_written_network(network: DeviceGraph) {
        assert_eq!(parse_network(&to_text(&network)), Ok(network));
    }

    #[test]
    fn no_links() {
        let graph = DeviceGraph::new(1);
        assert_eq!(to_text(&graph), "1");
        assert_eq!(parse_network("1"), Ok(graph));
    }

    #[test]
    fn lenient_parsing() {
        let graph = parse_network("\n 3 \n\n 2 , 0 , 4\r\n1,0,1\n\n").unwrap();
        assert_eq!(to_text(&graph), "3\n0,1,1\n0,2,4");
    }

    #[rstest]
    #[case("", 1, ParseErrorKind::MissingHeader)]
    #[case("x", 1, ParseErrorKind::InvalidNumber { field: "x".into() })]
    #[case("-2", 1, ParseErrorKind::InvalidNumber { field: "-2".into() })]
    #[case("3\n0,1", 2, ParseErrorKind::FieldCount { found: 2 })]
    #[case("3\n0,1,2,4", 2, ParseErrorKind::FieldCount { found: 4 })]
    #[case("3\n0,1,3", 2, ParseErrorKind::UnknownSpeed { value: 3 })]
    #[case("3\n0,1,300", 2, ParseErrorKind::InvalidNumber { field: "300".into() })]
    #[case("3\n0,a,1", 2, ParseErrorKind::InvalidNumber { field: "a".into() })]
    #[case(
        "3\n0,1,1\n\n1,1,1",
        4,
        ParseErrorKind::Graph(GraphError::SelfLoop { node: NodeIndex::new(1) })
    )]
    #[case(
        "3\n0,3,1",
        2,
        ParseErrorKind::UnknownDevice { index: 3, node_count: 3 }
    )]
    fn parse_errors(#[case] text: &str, #[case] line: usize, #[case] kind: ParseErrorKind) {
        assert_eq!(parse_network(text), Err(ParseError { line, kind }));
    }

    #[test]
    fn duplicate_links_are_rejected() {
        let err = parse_network("3\n0,1,1\n1,0,2").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(
            err.kind,
            ParseErrorKind::Graph(GraphError::DuplicateLink { .. })
        ));
        assert_eq!(err.to_string(), "line 3: devices 0 and 1 are already linked");
    }

    #[test]
    fn huge_device_count() {
        let graph = parse_network("4294967295").unwrap();
        assert_eq!(graph.node_count(), 4_294_967_295);
        assert_eq!(graph.link_count(), 0);

        let graph = parse_network("4294967295\n0,4294967294,4").unwrap();
        assert_eq!(graph.link_count(), 1);
        assert_eq!(
            graph.speed(n(4_294_967_294), n(0)),
            Some(SpeedClass::HundredMegabit)
        );
        assert_eq!(to_text(&graph), "4294967295\n0,4294967294,4");
    }

    #[rstest]
    fn write_and_read_file(network: DeviceGraph) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("network.txt");
        write_network_file(&path, &network).unwrap();
        assert_eq!(read_network(&path).unwrap(), network);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_network("/nonexistent/devnet/network.txt").unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}

//! Reading and writing graphs as edge lists.
//!
//! The format has one edge per line, given as two vertex tokens separated by whitespace.
//! A line with a single token declares an isolated vertex. Empty lines and lines starting
//! with `#` are ignored. Vertex tokens are parsed with [FromStr], so the same file can be
//! loaded as `EditGraph<u32>` (if all tokens are numbers) or as `EditGraph<String>`.
//!
//! For example, assume the file `square.txt` contains the following:
//! ```text
//! # A four-cycle
//! A B
//! A C
//! B D
//! C D
//! ```
//! We can then load the file as follows:
//!
//! ```rust,no_run
//! use bipartite::graph::*;
//! use bipartite::io::*;
//! use bipartite::editgraph::EditGraph;
//!
//! let graph:EditGraph<String> = EditGraph::from_txt("square.txt").expect("Could not open square.txt");
//! println!("Vertices: {:?}", graph.vertices().collect::<Vec<&String>>());
//! ```
use std::ffi::OsStr;
use std::fmt::Display;
use std::hash::Hash;
use std::io;
use std::io::{BufRead,BufReader,BufWriter,Write};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::editgraph::EditGraph;
use crate::graph::*;
use crate::iterators::*;

pub trait WriteToFile {
    fn write_txt(&self, filename:&str) -> io::Result<()> {
        let file = File::create(filename)?;
        let buf = BufWriter::new(file);
        self.write_buf(Box::new(buf))
    }

    fn write_gzipped(&self, filename:&str) -> io::Result<()> {
        let file = File::create(filename)?;
        let gz = GzEncoder::new(file, Compression::default());
        let buf = BufWriter::new(gz);
        self.write_buf(Box::new(buf))
    }

    fn write_buf(&self, buf:Box<dyn Write>) -> io::Result<()>;
}

pub trait LoadFromFile {
    fn from_txt(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader_txt(filename)?;
        Self::from_buf(buf)
    }

    fn from_gzipped(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader_gzip(filename)?;
        Self::from_buf(buf)
    }

    /// Picks the reader by file extension: `.gz` files are decompressed, `.txt`
    /// files are read as they are. Other extensions are rejected.
    fn from_file(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader(filename)?;
        Self::from_buf(buf)
    }

    fn from_buf(buf:Box<dyn BufRead>) -> io::Result<Self> where Self: Sized;
}

impl<V> WriteToFile for EditGraph<V> where V: Hash + Eq + Clone + Ord + Display {
    /// Writes every edge on its own line, followed by isolated vertices as single tokens.
    fn write_buf(&self, mut buf:Box<dyn Write>) -> io::Result<()> {
        for (u,v) in self.edges() {
            buf.write_all(format!("{u} {v}\n").as_bytes())?;
        }
        for u in self.vertices().filter(|u| self.degree(u) == 0) {
            buf.write_all(format!("{u}\n").as_bytes())?;
        }
        buf.flush()?;

        Ok(())
    }
}

/// I/O operations for [EditGraph] defined in [crate::io]
impl<V> LoadFromFile for EditGraph<V> where V: Hash + Eq + Clone + FromStr {
    fn from_buf(buf:Box<dyn BufRead>) -> io::Result<Self> where Self: Sized {
        let mut G = EditGraph::with_capacity(500);
        for (i, line) in buf.lines().enumerate() {
            let lineno = i + 1;
            let l = line?;
            let l = l.trim();
            if l.is_empty() || l.starts_with('#') {
                continue;
            }

            let tokens:Vec<&str> = l.split_whitespace().collect();
            match tokens[..] {
                [u] => {
                    let u = parse_vertex(u, lineno)?;
                    G.add_vertex(&u);
                }
                [u, v] => {
                    let u = parse_vertex(u, lineno)?;
                    let v = parse_vertex(v, lineno)?;
                    G.add_edge(&u,&v);
                }
                _ => {
                    let err = io::Error::new(io::ErrorKind::InvalidData,
                            format!("Line {} does not contain one or two tokens", lineno));
                    return Err(err)
                }
            }
        }

        debug!(vertices = G.num_vertices(), edges = G.num_edges(), "loaded edge list");
        Ok(G)
    }
}

fn open_reader(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let extension = path.extension().and_then(OsStr::to_str);
    match extension {
        Some("txt") => open_reader_txt(filename),
        Some("gz") => open_reader_gzip(filename),
        _ => {
            let error = io::Error::new(io::ErrorKind::InvalidInput,
                format!("Invalid file `{filename:?}`. The supported formats are `.txt.gz` and `.txt`."));
            Err(error)
        }
    }
}

fn open_reader_txt(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_reader_gzip(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    let gz = GzDecoder::new(file);
    Ok(Box::new(BufReader::new(gz)))
}

fn parse_vertex<V: FromStr>(s: &str, lineno:usize) -> io::Result<V> {
    match s.parse::<V>() {
        Ok(x) => Ok(x),
        Err(_) => Err(io::Error::new(io::ErrorKind::InvalidData,
                format!("Cannot parse vertex id {} at input line {}", s, lineno)))
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

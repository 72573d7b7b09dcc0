/// Loader for a line-oriented OBJ subset: `v x y z` vertex records and
/// `f a b c` face records with 1-based indices
use nom::{
    bytes::complete::{is_not, tag},
    character::complete::{char, digit1, multispace1},
    combinator::{map_res, opt},
    multi::separated_list1,
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::geometry::{Mesh, Triangle};
use crate::math::Vec3;

/// Parse OBJ-subset text into a mesh.
///
/// Loading is best-effort: malformed or out-of-range face records are
/// dropped and the rest of the file still loads. Comments, normals,
/// texture coordinates and negative indices are not supported; such
/// lines fall through unrecognized and are ignored.
pub fn parse_obj(input: &str) -> Mesh {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut mesh = Mesh::new();
    let mut dropped = 0usize;

    for line in input.lines() {
        if let Ok((_, vertex)) = parse_vertex_line(line) {
            vertices.push(vertex);
        } else if line.starts_with('f') {
            match resolve_face(line, &vertices) {
                Some(triangle) => mesh.add_triangle(triangle),
                None => {
                    dropped += 1;
                    tracing::debug!(line, "dropping unparseable face record");
                }
            }
        }
    }

    tracing::debug!(
        vertices = vertices.len(),
        triangles = mesh.triangles.len(),
        dropped,
        "mesh loaded"
    );
    mesh
}

fn resolve_face(line: &str, vertices: &[Vec3]) -> Option<Triangle> {
    let (_, indices) = parse_face_line(line).ok()?;
    if indices.len() < 3 {
        return None;
    }
    // Indices are 1-based; 0 underflows and is rejected with the rest.
    let lookup = |i: usize| vertices.get(i.checked_sub(1)?).copied();
    Some(Triangle::new(
        lookup(indices[0])?,
        lookup(indices[1])?,
        lookup(indices[2])?,
    ))
}

fn parse_vertex_line(input: &str) -> IResult<&str, Vec3> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    Ok((input, Vec3::new(x, y, z)))
}

fn parse_face_line(input: &str) -> IResult<&str, Vec<usize>> {
    let (input, _) = tag("f")(input)?;
    let (input, _) = multispace1(input)?;
    separated_list1(multispace1, parse_face_index)(input)
}

/// A face field is `index` or `index/...`; only the leading 1-based
/// vertex index is used
fn parse_face_index(input: &str) -> IResult<&str, usize> {
    let (input, index) = map_res(digit1, str::parse::<usize>)(input)?;
    let (input, _) = opt(preceded(char('/'), opt(is_not(" \t"))))(input)?;
    Ok((input, index))
}

//! Results grid component

use iocraft::prelude::*;

use super::movie_card::MovieCard;
use crate::catalog::MovieSummary;

/// Props for the MovieGrid component
#[derive(Default, Props)]
pub struct MovieGridProps {
    /// Movies of the displayed page
    pub movies: Vec<MovieSummary>,
    /// Index of the highlighted card
    pub selected_index: usize,
    /// First grid row on screen
    pub scroll_row: usize,
    /// Cards per row
    pub columns: usize,
    /// Rows that fit on screen
    pub visible_rows: usize,
    /// Whether the grid has keyboard focus
    pub has_focus: bool,
}

/// Grid of movie cards, scrolled to `scroll_row`
#[component]
pub fn MovieGrid(props: &MovieGridProps) -> impl Into<AnyElement<'static>> {
    let columns = props.columns.max(1);
    let rows: Vec<(usize, Vec<MovieSummary>)> = props
        .movies
        .chunks(columns)
        .enumerate()
        .skip(props.scroll_row)
        .take(props.visible_rows.max(1))
        .map(|(row, chunk)| (row * columns, chunk.to_vec()))
        .collect();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Hidden,
            padding_left: 1,
        ) {
            #(rows.into_iter().map(|(first_index, movies)| {
                element! {
                    View(flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
                        #(movies.into_iter().enumerate().map(move |(offset, movie)| {
                            let is_selected =
                                props.has_focus && first_index + offset == props.selected_index;
                            element! {
                                MovieCard(movie, is_selected)
                            }
                        }))
                    }
                }
            }))
        }
    }
}

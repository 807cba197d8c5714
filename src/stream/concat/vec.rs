use super::Concat as ConcatTrait;
use crate::stream::IntoStream;
use crate::utils;

use alloc::vec::Vec;
use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that yields the values of multiple streams one after another.
///
/// This `struct` is created by the [`concat`] method on the [`Concat`] trait.
/// See its documentation for more.
///
/// [`concat`]: crate::stream::Concat::concat
/// [`Concat`]: crate::stream::Concat
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Concat<S> {
    #[pin]
    streams: Vec<S>,
    index: usize,
    done: bool,
}

impl<S: Stream> Stream for Concat<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        assert!(!*this.done, "Stream should not be polled after completion");

        loop {
            if *this.index == this.streams.len() {
                *this.done = true;
                return Poll::Ready(None);
            }
            let stream = utils::get_pin_mut_from_vec(this.streams.as_mut(), *this.index);
            match stream.poll_next(cx) {
                Poll::Ready(Some(item)) => return Poll::Ready(Some(item)),
                Poll::Ready(None) => *this.index += 1,
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S: Clone> Clone for Concat<S> {
    fn clone(&self) -> Self {
        Self {
            streams: self.streams.clone(),
            index: self.index,
            done: self.done,
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Concat<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(&self.streams[self.index..])
            .finish()
    }
}

impl<S: IntoStream> ConcatTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoStream;

    fn concat(self) -> Concat<Self::Source> {
        Concat {
            streams: self.into_iter().map(IntoStream::into_stream).collect(),
            index: 0,
            done: false,
        }
    }
}

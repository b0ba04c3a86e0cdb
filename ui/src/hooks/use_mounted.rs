use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Shared flag that turns false once the owning component unmounts.
///
/// Async completions check it and drop their result instead of touching
/// state that no longer backs anything on screen.
#[derive(Clone, Debug)]
pub struct MountedFlag(Rc<Cell<bool>>);

impl MountedFlag {
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }
}

#[hook]
pub fn use_mounted() -> MountedFlag {
    let flag = use_memo((), |_| MountedFlag(Rc::new(Cell::new(true))));

    {
        let flag = (*flag).clone();
        use_effect_with((), move |_| {
            flag.0.set(true);
            move || flag.0.set(false)
        });
    }

    (*flag).clone()
}

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Tracks whether the component is still mounted.
///
/// In-flight requests are not aborted when the user navigates away; the
/// response simply arrives after the page is gone. A fetch must check this
/// flag before touching its state handles so it never writes into an
/// unmounted component.
#[hook]
pub fn use_mounted() -> Rc<Cell<bool>> {
    let mounted = use_memo((), |_| Cell::new(true));

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| move || mounted.set(false));
    }

    mounted
}

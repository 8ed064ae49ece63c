use crate::mvi::Reducer;
use crate::store::{PostsState, PostsStore};
use crate::ui::form::{FormIntent, FormReducer, PostFormState};

/// Author id attached to every draft submitted from the form.
pub const DRAFT_USER_ID: u64 = 1;

pub const SUBMIT_LABEL: &str = "Publish";
pub const SUBMIT_LABEL_BUSY: &str = "Publishing...";

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The posts screen: store handle plus screen-local form and view state.
pub struct App {
    store: PostsStore,
    /// Latest store snapshot the view renders from.
    posts: PostsState,
    form: PostFormState,
    list_offset: usize,
    animation_tick: u8,
    mounted: bool,
    should_quit: bool,
}

impl App {
    pub fn new(store: PostsStore) -> Self {
        let posts = store.snapshot();
        Self {
            store,
            posts,
            form: PostFormState::default(),
            list_offset: 0,
            animation_tick: 0,
            mounted: false,
            should_quit: false,
        }
    }

    /// Initial fetch. Only the first call dispatches.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.store.fetch_posts();
        self.sync_posts();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn posts(&self) -> &PostsState {
        &self.posts
    }

    pub fn form(&self) -> &PostFormState {
        &self.form
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Pulls the latest store snapshot. Called when the store signals a change.
    pub fn sync_posts(&mut self) {
        self.posts = self.store.snapshot();
        self.clamp_list_offset();
    }

    pub fn on_tick(&mut self) {
        if self.posts.is_fetching() || self.posts.is_adding() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Submit control is disabled while a field is blank or an add is in flight.
    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && !self.posts.is_adding()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.posts.is_adding() {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    /// Sends the form as a new post and clears it right away.
    ///
    /// Blank title or body makes this a no-op. The fields are cleared on
    /// dispatch, so a failed submission leaves an empty form.
    pub fn handle_add_post(&mut self) -> bool {
        if !self.form.is_complete() {
            return false;
        }

        let draft = self.form.to_draft(DRAFT_USER_ID);
        self.store.add_post(draft);
        self.dispatch_form(FormIntent::Clear);
        self.sync_posts();
        true
    }

    /// Submit key: ignored while the control is disabled.
    pub fn press_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.handle_add_post()
    }

    /// Re-runs the fetch on user request.
    pub fn refresh(&mut self) {
        self.store.fetch_posts();
        self.sync_posts();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.list_offset = self.list_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.list_offset = self.list_offset.saturating_add(lines);
        self.clamp_list_offset();
    }

    pub fn scroll_to_top(&mut self) {
        self.list_offset = 0;
    }

    fn clamp_list_offset(&mut self) {
        let max = self.posts.items().len().saturating_sub(1);
        self.list_offset = self.list_offset.min(max);
    }
}

use ratatui::widgets::ListState;
use snapfit_core::seed::TEMPLATES;
use snapfit_core::{Config, Conversation, PendingReply, ReplyScheduler, WorkoutTracker};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    Gym,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// One selectable line of the gym screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GymRow {
    Workout(usize),
    Exercise(usize, usize),
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,

    // Chat state
    pub conversation: Conversation,
    pub scheduler: ReplyScheduler,
    pub chat_input: String,
    pub chat_cursor: usize, // cursor position in chat_input (chars)
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of chat area for scroll calculations
    pub chat_width: u16,  // Width of chat area for wrap calculations

    // Gym state
    pub workouts: WorkoutTracker,
    pub workout_document: String,
    pub gym_state: ListState,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Last toggle problem, shown in the footer
    pub status: Option<String>,
}

impl App {
    pub fn new(config: &Config, replies: mpsc::UnboundedSender<PendingReply>) -> Self {
        let workout_document = config.workout_document();

        let mut app = Self {
            should_quit: false,
            screen: Screen::Chat,
            input_mode: InputMode::Normal,

            conversation: Conversation::default(),
            scheduler: ReplyScheduler::new(config.reply_delay(), replies),
            chat_input: String::new(),
            chat_cursor: 0,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,

            workouts: WorkoutTracker::default(),
            workout_document,
            gym_state: ListState::default(),

            animation_frame: 0,
            status: None,
        };
        app.activate_chat();
        app
    }

    /// Tab between screens; each screen starts fresh when it is shown
    pub fn switch_screen(&mut self) {
        self.input_mode = InputMode::Normal;
        self.status = None;
        match self.screen {
            Screen::Chat => self.activate_gym(),
            Screen::Gym => self.activate_chat(),
        }
    }

    pub fn activate_chat(&mut self) {
        self.scheduler.cancel_all();
        self.conversation.initialize();
        self.chat_input.clear();
        self.chat_cursor = 0;
        self.chat_scroll = 0;
        self.screen = Screen::Chat;
    }

    pub fn activate_gym(&mut self) {
        self.workouts = WorkoutTracker::from_document(&self.workout_document);
        let first = if self.workouts.current_state().is_empty() { None } else { Some(0) };
        self.gym_state = ListState::default();
        self.gym_state.select(first);
        self.screen = Screen::Gym;
    }

    // Chat actions
    pub fn submit_chat_input(&mut self) {
        if let Some(pending) = self.conversation.submit_user_text(&self.chat_input) {
            self.scheduler.schedule(pending);
            self.chat_input.clear();
            self.chat_cursor = 0;
            self.scroll_chat_to_bottom();
        }
    }

    pub fn receive_reply(&mut self, reply: PendingReply) {
        if self.conversation.complete_reply(reply).is_some() {
            self.scroll_chat_to_bottom();
        }
    }

    /// Fill the input with a quick reply, only when nothing has been typed
    pub fn use_template(&mut self, index: usize) {
        if !self.conversation.shows_templates() || !self.chat_input.is_empty() {
            return;
        }
        if let Some(template) = TEMPLATES.get(index) {
            self.chat_input = template.to_string();
            self.chat_cursor = self.chat_input.chars().count();
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn scroll_chat_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    /// Scroll chat to bottom so the newest message (or "Typing...") is visible
    pub fn scroll_chat_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let state = self.conversation.current_state();
        let mut total_lines: usize = 0;

        for msg in &state.messages {
            total_lines += 1; // Sender line
            for line in msg.content.lines() {
                // Use character count, not byte length, for proper UTF-8 handling
                let char_count = line.chars().count();
                total_lines += (char_count / wrap_width) + 1;
            }
            total_lines += 1; // Blank line after message
        }

        if state.is_typing {
            total_lines += 2; // Sender line + "Typing..."
        }

        let visible_height = if self.chat_height > 0 {
            self.chat_height as usize
        } else {
            20
        };

        // Paragraph scroll offsets are u16; very long transcripts pin to the max
        let scroll = total_lines.saturating_sub(visible_height);
        self.chat_scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.conversation.is_typing() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    // Gym actions
    pub fn gym_rows(&self) -> Vec<GymRow> {
        let mut rows = Vec::new();
        for (g, group) in self.workouts.current_state().groups().iter().enumerate() {
            rows.push(GymRow::Workout(g));
            rows.extend((0..group.exercises.len()).map(|e| GymRow::Exercise(g, e)));
        }
        rows
    }

    pub fn selected_gym_row(&self) -> Option<GymRow> {
        self.gym_state
            .selected()
            .and_then(|i| self.gym_rows().get(i).copied())
    }

    pub fn gym_nav_down(&mut self) {
        let len = self.gym_rows().len();
        if len > 0 {
            let i = self.gym_state.selected().unwrap_or(0);
            self.gym_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn gym_nav_up(&mut self) {
        let i = self.gym_state.selected().unwrap_or(0);
        self.gym_state.select(Some(i.saturating_sub(1)));
    }

    pub fn gym_nav_first(&mut self) {
        if !self.gym_rows().is_empty() {
            self.gym_state.select(Some(0));
        }
    }

    pub fn gym_nav_last(&mut self) {
        let len = self.gym_rows().len();
        if len > 0 {
            self.gym_state.select(Some(len - 1));
        }
    }

    /// Toggle whatever the cursor is on: a whole workout or one exercise
    pub fn toggle_selected(&mut self) {
        let result = match self.selected_gym_row() {
            Some(GymRow::Workout(g)) => self.workouts.toggle_workout(g),
            Some(GymRow::Exercise(g, e)) => self.workouts.toggle_exercise(g, e),
            None => return,
        };

        self.status = match result {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(error = %err, "toggle rejected");
                Some(err.to_string())
            }
        };
    }
}

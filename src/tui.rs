use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
};
use std::io::stdout;
use std::time::{Duration, Instant};

use crate::form::{ApplicationForm, Field};
use crate::models::{ApplicationInput, ApplicationPatch, JobType, Status};
use crate::query::{self, QueryState, SearchField, SortDir, SortKey};
use crate::session::Session;
use crate::stats::DashboardStats;
use crate::store::ApplicationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Dashboard,
    AddApplication,
    Applications,
    NotFound,
}

impl Route {
    fn requires_session(self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::AddApplication | Route::Applications
        )
    }

    fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::AddApplication => "Add Application",
            Route::Applications => "Applications",
            Route::NotFound => "Not Found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableMode {
    Browse,
    Search,
    /// Inline edit of the record with this id.
    Edit(u64),
}

/// Whole-program state: the two stores plus per-screen view state, built
/// once at startup and threaded through explicitly.
pub struct App {
    pub store: ApplicationStore,
    pub session: Session,
    pub query: QueryState,
    route: Route,
    // add-application screen
    form: ApplicationForm,
    form_focus: usize,
    // login screen
    login_email: String,
    login_password: String,
    login_focus: LoginField,
    // applications screen
    mode: TableMode,
    edit_form: ApplicationForm,
    edit_focus: usize,
    selected_row: usize,
    should_quit: bool,
}

impl App {
    pub fn new(store: ApplicationStore, session: Session) -> Self {
        Self {
            store,
            session,
            query: QueryState::default(),
            route: Route::Home,
            form: ApplicationForm::new(),
            form_focus: 0,
            login_email: String::new(),
            login_password: String::new(),
            login_focus: LoginField::Email,
            mode: TableMode::Browse,
            edit_form: ApplicationForm::new(),
            edit_focus: 0,
            selected_row: 0,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Protected screens bounce to the login screen without a session.
    pub fn navigate(&mut self, route: Route) {
        self.route = if route.requires_session() && !self.session.is_logged_in() {
            Route::Login
        } else {
            route
        };
        if self.route == Route::Applications {
            self.mode = TableMode::Browse;
            self.selected_row = 0;
        }
    }

    fn logout(&mut self) {
        self.session.logout();
        self.navigate(Route::Home);
    }

    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);
        self.edit_form.tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.route {
            Route::Home | Route::NotFound => self.handle_browse_key(key.code),
            Route::Login => self.handle_login_key(key.code),
            Route::Dashboard => self.handle_browse_key(key.code),
            Route::AddApplication => self.handle_add_key(key.code),
            Route::Applications => match self.mode {
                TableMode::Browse => self.handle_table_key(key.code),
                TableMode::Search => self.handle_search_key(key.code),
                TableMode::Edit(id) => self.handle_edit_key(key.code, id),
            },
        }
    }

    /// Route jumps shared by every non-typing context. Digits mirror the
    /// original URL bar; anything unmapped lands on the not-found screen.
    fn handle_route_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.navigate(Route::Home),
            KeyCode::Char('2') => self.navigate(Route::Login),
            KeyCode::Char('3') => self.navigate(Route::Dashboard),
            KeyCode::Char('4') => self.navigate(Route::AddApplication),
            KeyCode::Char('5') => self.navigate(Route::Applications),
            KeyCode::Char(c) if c.is_ascii_digit() => self.navigate(Route::NotFound),
            _ => return false,
        }
        true
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        if self.handle_route_key(code) {
            return;
        }
        match code {
            KeyCode::Char('l') => {
                if self.session.is_logged_in() {
                    self.logout();
                } else {
                    self.navigate(Route::Login);
                }
            }
            KeyCode::Enter if self.route == Route::Home => {
                if self.session.is_logged_in() {
                    self.navigate(Route::Dashboard);
                } else {
                    self.navigate(Route::Login);
                }
            }
            KeyCode::Esc if self.route == Route::NotFound => self.navigate(Route::Home),
            _ => {}
        }
    }

    fn handle_login_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.navigate(Route::Home),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.login_focus = match self.login_focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            KeyCode::Enter => {
                let email = self.login_email.trim().to_string();
                if !email.is_empty() {
                    self.session.login(&email, &self.login_password);
                    self.login_password.clear();
                    self.navigate(Route::Dashboard);
                }
            }
            KeyCode::Backspace => {
                match self.login_focus {
                    LoginField::Email => self.login_email.pop(),
                    LoginField::Password => self.login_password.pop(),
                };
            }
            KeyCode::Char(c) => match self.login_focus {
                LoginField::Email => self.login_email.push(c),
                LoginField::Password => self.login_password.push(c),
            },
            _ => {}
        }
    }

    fn handle_add_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.navigate(Route::Applications),
            KeyCode::Tab | KeyCode::Down => {
                self.form_focus = (self.form_focus + 1) % Field::ALL.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_focus = (self.form_focus + Field::ALL.len() - 1) % Field::ALL.len();
            }
            KeyCode::Enter => self.submit_add(),
            code => {
                let field = Field::ALL[self.form_focus];
                edit_field(&mut self.form, field, code);
            }
        }
    }

    fn submit_add(&mut self) {
        if !self.form.validate() {
            return;
        }
        if let Some(input) = self.form.to_input() {
            self.store.add(input);
            self.form.set_notice("Application added!", Instant::now());
            self.form.clear();
            self.form_focus = 0;
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) {
        if self.handle_route_key(code) {
            return;
        }
        let page = query::run(self.store.records(), &self.query);
        match code {
            KeyCode::Char('l') => self.logout(),
            KeyCode::Char('/') => self.mode = TableMode::Search,
            KeyCode::Char('f') => {
                let next = cycle_option(&JobType::ALL, self.query.job_type_filter);
                self.query.set_job_type_filter(next);
                self.selected_row = 0;
            }
            KeyCode::Char('s') => {
                let next = cycle_option(&Status::ALL, self.query.status_filter);
                self.query.set_status_filter(next);
                self.selected_row = 0;
            }
            KeyCode::Char('t') => {
                self.query.search_field = match self.query.search_field {
                    SearchField::CompanyName => SearchField::JobTitle,
                    SearchField::JobTitle => SearchField::CompanyName,
                };
            }
            KeyCode::Char('c') => self.query.toggle_sort(SortKey::CompanyName),
            KeyCode::Char('d') => self.query.toggle_sort(SortKey::AppliedDate),
            KeyCode::Char('r') => self.query.reset_sort(),
            KeyCode::Char('n') | KeyCode::Right => {
                if self.query.next_page(page.total_pages) {
                    self.selected_row = 0;
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if self.query.prev_page() {
                    self.selected_row = 0;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if !page.items.is_empty() && self.selected_row < page.items.len() - 1 {
                    self.selected_row += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Char('e') => {
                if let Some(record) = page.items.get(self.selected_row) {
                    self.edit_form = ApplicationForm::from_record(record);
                    self.edit_focus = 0;
                    self.mode = TableMode::Edit(record.id);
                }
            }
            KeyCode::Char('x') => {
                if let Some(record) = page.items.get(self.selected_row) {
                    self.delete_record(record.id);
                }
            }
            _ => {}
        }
    }

    fn delete_record(&mut self, id: u64) {
        self.store.delete(id);
        // Deleting the only row of a later page steps back one page.
        let after = query::run(self.store.records(), &self.query);
        if after.items.is_empty() && self.query.page > 1 {
            self.query.prev_page();
        }
        let len = query::run(self.store.records(), &self.query).items.len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.mode = TableMode::Browse,
            KeyCode::Backspace => {
                let mut term = self.query.search_term.clone();
                term.pop();
                self.query.set_search_term(term);
                self.selected_row = 0;
            }
            KeyCode::Char(c) => {
                let mut term = self.query.search_term.clone();
                term.push(c);
                self.query.set_search_term(term);
                self.selected_row = 0;
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode, id: u64) {
        match code {
            KeyCode::Esc => self.mode = TableMode::Browse,
            KeyCode::Tab | KeyCode::Down => {
                self.edit_focus = (self.edit_focus + 1) % Field::ALL.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.edit_focus = (self.edit_focus + Field::ALL.len() - 1) % Field::ALL.len();
            }
            KeyCode::Enter => {
                if self.edit_form.validate() {
                    if let Some(input) = self.edit_form.to_input() {
                        self.store.update(id, &patch_from(input));
                        self.mode = TableMode::Browse;
                    }
                }
            }
            code => {
                let field = Field::ALL[self.edit_focus];
                edit_field(&mut self.edit_form, field, code);
            }
        }
    }
}

/// The inline edit sends every field, like the original edit row.
fn patch_from(input: ApplicationInput) -> ApplicationPatch {
    ApplicationPatch {
        company_name: Some(input.company_name),
        job_title: Some(input.job_title),
        job_type: Some(input.job_type),
        status: Some(input.status),
        location: Some(input.location),
        applied_date: Some(input.applied_date),
        notes: Some(input.notes),
    }
}

fn cycle_option<T: Copy + PartialEq>(all: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let idx = all.iter().position(|v| *v == value);
            match idx {
                Some(i) if i + 1 < all.len() => Some(all[i + 1]),
                _ => None,
            }
        }
    }
}

fn edit_field(form: &mut ApplicationForm, field: Field, code: KeyCode) {
    match field {
        Field::JobType => {
            if matches!(code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
                form.job_type = cycle_option(&JobType::ALL, form.job_type)
                    .or_else(|| JobType::ALL.first().copied());
                form.touched(field);
            }
        }
        Field::Status => {
            if matches!(code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
                form.status = cycle_option(&Status::ALL, form.status)
                    .or_else(|| Status::ALL.first().copied());
                form.touched(field);
            }
        }
        _ => match code {
            KeyCode::Char(c) => {
                if let Some(text) = text_field_mut(form, field) {
                    text.push(c);
                }
                form.touched(field);
            }
            KeyCode::Backspace => {
                if let Some(text) = text_field_mut(form, field) {
                    text.pop();
                }
                form.touched(field);
            }
            _ => {}
        },
    }
}

fn text_field_mut(form: &mut ApplicationForm, field: Field) -> Option<&mut String> {
    match field {
        Field::CompanyName => Some(&mut form.company_name),
        Field::JobTitle => Some(&mut form.job_title),
        Field::Location => Some(&mut form.location),
        Field::AppliedDate => Some(&mut form.applied_date),
        Field::Notes => Some(&mut form.notes),
        Field::JobType | Field::Status => None,
    }
}

pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        // Short poll so the success-notice deadline fires without input.
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        app.tick(Instant::now());
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_navbar(frame, app, chunks[0]);

    match app.route {
        Route::Home => draw_home(frame, app, chunks[1]),
        Route::Login => draw_login(frame, app, chunks[1]),
        Route::Dashboard => draw_dashboard(frame, app, chunks[1]),
        Route::AddApplication => {
            draw_form(frame, &app.form, app.form_focus, "Add Job Application", chunks[1]);
        }
        Route::Applications => match app.mode {
            TableMode::Edit(id) => {
                let title = format!("Edit Application #{}", id);
                draw_form(frame, &app.edit_form, app.edit_focus, &title, chunks[1]);
            }
            _ => draw_applications(frame, app, chunks[1]),
        },
        Route::NotFound => draw_not_found(frame, chunks[1]),
    }

    let help = Paragraph::new(help_line(app)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn help_line(app: &App) -> &'static str {
    match app.route {
        Route::Login => " type email/password  Tab:switch field  Enter:login  Esc:back",
        Route::AddApplication => {
            " Tab:next field  Space:cycle choice  Enter:submit  Esc:applications"
        }
        Route::Applications => match app.mode {
            TableMode::Browse => {
                " /:search t:field f:type s:status c/d:sort r:reset n/p:page j/k:row e:edit x:delete l:logout q:quit"
            }
            TableMode::Search => " type to search  Enter/Esc:done",
            TableMode::Edit(_) => " Tab:next field  Space:cycle choice  Enter:save  Esc:cancel",
        },
        _ => " 1:home 2:login 3:dashboard 4:add 5:applications  l:login/logout  q:quit",
    }
}

fn draw_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let who = match app.session.user() {
        Some(user) => format!("{} ({})", user.email, user.role),
        None => "not logged in".to_string(),
    };
    let navbar = Paragraph::new(format!(" Job Tracker | {} | {}", app.route.title(), who))
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(navbar, area);
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Job Application Tracker",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Keep track of all your job applications in one place"),
        Line::from(""),
    ];
    if app.session.is_logged_in() {
        lines.push(Line::from("Enter: go to dashboard"));
    } else {
        lines.push(Line::from("Enter: get started (login)"));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Track applications, search and filter them, and"));
    lines.push(Line::from("see a summary of where everything stands."));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Home "))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn draw_login(frame: &mut Frame, app: &App, area: Rect) {
    let focus = |field: LoginField| {
        if app.login_focus == field {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };
    let masked = "*".repeat(app.login_password.len());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Email:    {}", app.login_email),
            focus(LoginField::Email),
        )),
        Line::from(Span::styled(
            format!("Password: {}", masked),
            focus(LoginField::Password),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Any credentials work; this only unlocks the screens.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Login "));
    frame.render_widget(widget, area);
}

fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let stats = DashboardStats::compute(app.store.records());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(chunks[0]);

    let counts = [
        ("Total", stats.total),
        ("Applied", stats.applied),
        ("Interview", stats.interview_scheduled),
        ("Selected", stats.selected),
        ("Rejected", stats.rejected),
    ];
    for (i, (label, value)) in counts.iter().enumerate() {
        let card = Paragraph::new(format!("{}", value)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", label)),
        );
        frame.render_widget(card, cards[i]);
    }

    if app.store.is_empty() {
        let empty = Paragraph::new("No applications yet. Start by adding your first application!")
            .block(Block::default().borders(Borders::ALL).title(" Dashboard "));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = stats
        .recent
        .iter()
        .map(|r| {
            let date = r
                .applied_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            ListItem::new(format!(
                "{} | {} | {} | {} | {}",
                r.company_name, r.job_title, r.job_type, r.status, date
            ))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Last 5 Applications "),
    );
    frame.render_widget(list, chunks[1]);
}

fn draw_form(frame: &mut Frame, form: &ApplicationForm, focus: usize, title: &str, area: Rect) {
    let mut lines = Vec::new();

    if let Some(notice) = form.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(""));
    }

    for (i, field) in Field::ALL.iter().enumerate() {
        let value = match field {
            Field::CompanyName => form.company_name.clone(),
            Field::JobTitle => form.job_title.clone(),
            Field::JobType => form
                .job_type
                .map(|v| v.to_string())
                .unwrap_or_else(|| "(select)".to_string()),
            Field::Status => form
                .status
                .map(|v| v.to_string())
                .unwrap_or_else(|| "(select)".to_string()),
            Field::Location => form.location.clone(),
            Field::AppliedDate => form.applied_date.clone(),
            Field::Notes => form.notes.clone(),
        };
        let required = !matches!(field, Field::AppliedDate | Field::Notes);
        let marker = if required { "*" } else { " " };
        let style = if i == focus {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{}{:<14} {}", marker, field.label(), value),
            style,
        )));
        if let Some(err) = form.error_for(*field) {
            lines.push(Line::from(Span::styled(
                format!("  {}", err),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn draw_applications(frame: &mut Frame, app: &App, area: Rect) {
    let page = query::run(app.store.records(), &app.query);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_table_controls(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    if page.items.is_empty() {
        let empty = Paragraph::new("No applications found.")
            .block(Block::default().borders(Borders::ALL).title(" Applications "));
        frame.render_widget(empty, body[0]);
    } else {
        let header = Row::new(["Company", "Title", "Type", "Status", "Location", "Applied"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = page
            .items
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let date = r
                    .applied_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                let row = Row::new(vec![
                    Cell::from(r.company_name.clone()),
                    Cell::from(r.job_title.clone()),
                    Cell::from(r.job_type.to_string()),
                    Cell::from(r.status.to_string()),
                    Cell::from(r.location.clone()),
                    Cell::from(date),
                ]);
                if i == app.selected_row {
                    row.style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    row
                }
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(20),
                Constraint::Percentage(22),
                Constraint::Percentage(12),
                Constraint::Percentage(18),
                Constraint::Percentage(14),
                Constraint::Percentage(14),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Applications ({}) ",
            page.total_matches
        )));
        frame.render_widget(table, body[0]);
    }

    draw_detail(frame, app, &page.items, body[1]);

    let prev = if app.query.page > 1 { "[p]rev" } else { " prev " };
    let next = if app.query.page < page.total_pages {
        "[n]ext"
    } else {
        " next "
    };
    let footer = Paragraph::new(format!(
        " {}  Page {} of {}  {}",
        prev, app.query.page, page.total_pages, next
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}

fn draw_table_controls(frame: &mut Frame, app: &App, area: Rect) {
    let field = match app.query.search_field {
        SearchField::CompanyName => "company",
        SearchField::JobTitle => "title",
    };
    let cursor = if app.mode == TableMode::Search { "_" } else { "" };
    let job_type = app
        .query
        .job_type_filter
        .map(|v| v.to_string())
        .unwrap_or_else(|| "All".to_string());
    let status = app
        .query
        .status_filter
        .map(|v| v.to_string())
        .unwrap_or_else(|| "All".to_string());
    let sort = match app.query.sort {
        None => "none".to_string(),
        Some(SortKey::CompanyName) => format!("company {}", dir_label(app.query.sort_dir)),
        Some(SortKey::AppliedDate) => format!("date {}", dir_label(app.query.sort_dir)),
    };

    let controls = Paragraph::new(vec![
        Line::from(format!(
            " Search [{}]: {}{}",
            field, app.query.search_term, cursor
        )),
        Line::from(format!(
            " Type: {}  Status: {}  Sort: {}",
            job_type, status, sort
        )),
    ]);
    frame.render_widget(controls, area);
}

fn dir_label(dir: SortDir) -> &'static str {
    match dir {
        SortDir::Asc => "asc",
        SortDir::Desc => "desc",
    }
}

fn draw_detail(
    frame: &mut Frame,
    app: &App,
    items: &[crate::models::ApplicationRecord],
    area: Rect,
) {
    let mut lines = Vec::new();
    if let Some(record) = items.get(app.selected_row) {
        lines.push(Line::from(Span::styled(
            record.company_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(record.job_title.clone()));
        lines.push(Line::from(format!(
            "{} | {}",
            record.job_type, record.status
        )));
        lines.push(Line::from(format!("Location: {}", record.location)));
        let date = record
            .applied_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(Line::from(format!("Applied: {}", date)));
        if let Some(notes) = &record.notes {
            lines.push(Line::from(""));
            let width = usize::from(area.width.saturating_sub(4).max(20));
            for line in textwrap::fill(notes, width).lines() {
                lines.push(Line::from(line.to_string()));
            }
        }
    } else {
        lines.push(Line::from("No application selected"));
    }
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn draw_not_found(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(vec![
        Line::from(Span::styled(
            "404 - Page Not Found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("That screen does not exist. Esc or 1 goes home."),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Not Found "));
    frame.render_widget(widget, area);
}

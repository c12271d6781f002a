//! Translation tables, grouped by where the text appears on screen.

pub struct Translations {
    pub common: CommonTexts,
    pub nav: NavTexts,
    pub home: HomeTexts,
    pub fields: FieldTexts,
    pub form: FormTexts,
    pub table: TableTexts,
    pub notify: NotifyTexts,
    pub confirm: ConfirmTexts,
    pub help: HelpTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub none: &'static str,
    pub language: &'static str,
}

/// Screen names. The singular forms are used in notifications and titles.
pub struct NavTexts {
    pub home: &'static str,
    pub logs: &'static str,
    pub events: &'static str,
    pub locations: &'static str,
    pub contacts: &'static str,
    pub event: &'static str,
    pub location: &'static str,
    pub contact: &'static str,
}

pub struct HomeTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub events_hint: &'static str,
    pub locations_hint: &'static str,
    pub contacts_hint: &'static str,
}

pub struct FieldTexts {
    pub title: &'static str,
    pub guests: &'static str,
    pub date_time: &'static str,
    pub timezone: &'static str,
    pub description: &'static str,
    pub repetition: &'static str,
    pub reminder: &'static str,
    pub classification: &'static str,
    pub place: &'static str,
    pub address: &'static str,
    pub coordinates: &'static str,
    pub greeting: &'static str,
    pub full_name: &'static str,
    pub id_number: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub photo: &'static str,
    pub choices: ChoiceTexts,
}

impl FieldTexts {
    /// Label for a schema field; unknown names are shown as is.
    pub fn label<'a>(&self, name: &'a str) -> &'a str {
        match name {
            "title" => self.title,
            "guests" => self.guests,
            "date_time" => self.date_time,
            "timezone" => self.timezone,
            "description" => self.description,
            "repetition" => self.repetition,
            "reminder" => self.reminder,
            "classification" => self.classification,
            "place" => self.place,
            "address" => self.address,
            "coordinates" => self.coordinates,
            "greeting" => self.greeting,
            "full_name" => self.full_name,
            "id_number" => self.id_number,
            "email" => self.email,
            "phone" => self.phone,
            "photo" => self.photo,
            other => other,
        }
    }
}

/// Display names for stored choice values.
pub struct ChoiceTexts {
    pub not_selected: &'static str,
    pub repeat_none: &'static str,
    pub repeat_daily: &'static str,
    pub repeat_weekly: &'static str,
    pub mr: &'static str,
    pub mrs: &'static str,
    pub dr: &'static str,
}

impl ChoiceTexts {
    pub fn display<'a>(&self, value: &'a str) -> &'a str {
        match value {
            "" => self.not_selected,
            "None" => self.repeat_none,
            "Daily" => self.repeat_daily,
            "Weekly" => self.repeat_weekly,
            "Mr." => self.mr,
            "Mrs." => self.mrs,
            "Dr." => self.dr,
            other => other,
        }
    }
}

pub struct FormTexts {
    /// `{resource}`
    pub new_title: &'static str,
    /// `{resource}`, `{id}`
    pub edit_title: &'static str,
    pub required_marker: &'static str,
    /// `{fields}`
    pub missing_required: &'static str,
    /// `{field}`, `{value}`
    pub invalid_date_time: &'static str,
    pub date_time_hint: &'static str,
    pub file_hint: &'static str,
    pub current_file: &'static str,
    /// `{file}`
    pub selected_file: &'static str,
}

pub struct TableTexts {
    /// `{resources}`
    pub empty: &'static str,
    pub empty_hint: &'static str,
    /// `{resources}`
    pub loading: &'static str,
    /// `{resources}`
    pub load_failed: &'static str,
    pub reload_hint: &'static str,
    pub id_column: &'static str,
    pub attached: &'static str,
}

/// Notification templates. `{resource}` is the singular name, `{id}` the
/// record identity, `{error}` the failure.
pub struct NotifyTexts {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub not_found: &'static str,
    pub invalid_form: &'static str,
    /// `{language}`
    pub language_changed: &'static str,
}

pub struct ConfirmTexts {
    pub title: &'static str,
    /// `{resource}`, `{id}`
    pub message: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub cancel: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global_section: &'static str,
    pub move_up: &'static str,
    pub move_down: &'static str,
    pub open_selected: &'static str,
    pub new_record: &'static str,
    pub edit_record: &'static str,
    pub delete_record: &'static str,
    pub reload: &'static str,
    pub focus_form: &'static str,
    pub next_field: &'static str,
    pub prev_field: &'static str,
    pub cycle_choice: &'static str,
    pub toggle_flag: &'static str,
    pub submit: &'static str,
    pub clear_field: &'static str,
    pub delete_char: &'static str,
    pub leave_form: &'static str,
    pub scroll_up: &'static str,
    pub scroll_down: &'static str,
    pub page_up: &'static str,
    pub page_down: &'static str,
    pub top: &'static str,
    pub bottom: &'static str,
    pub back: &'static str,
    pub go_home: &'static str,
    pub go_logs: &'static str,
    pub open_pages: &'static str,
    pub switch_language: &'static str,
    pub toggle_help: &'static str,
    pub quit: &'static str,
    pub home_bar: &'static str,
    pub page_bar: &'static str,
    pub form_bar: &'static str,
    pub logs_bar: &'static str,
}

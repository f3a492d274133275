//! Static translation catalog.
//!
//! Every user-visible string resolves through [`translate`]: the requested
//! dictionary first, then the default-language dictionary, then the key
//! itself rendered verbatim. Unknown language codes never error; they are
//! resolved to the default language before lookup.

use chrono::{Datelike, NaiveDate};

use crate::models::language::Language;

/// Every key known to the catalog. Tests assert each one resolves in every
/// supported language.
pub const KEYS: &[&str] = &[
    "hero.title",
    "hero.subtitle",
    "about.title",
    "about.body",
    "booking.title",
    "calendar.select_date",
    "calendar.select_time",
    "calendar.confirm",
    "calendar.selected_date",
    "calendar.selected_time",
    "calendar.redirecting",
    "calendar.prev",
    "calendar.next",
    "form.appointment.title",
    "form.contact.title",
    "form.name",
    "form.email",
    "form.message",
    "form.send",
    "form.placeholder.name",
    "form.placeholder.email",
    "form.placeholder.message",
    "form.success",
    "language.label",
];

/// Exact dictionary hit, no fallback.
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    use Language::{English, French, Spanish};

    let text = match (lang, key) {
        (French, "hero.title") => "Accompagnement & bien-être",
        (English, "hero.title") => "Support & well-being",
        (Spanish, "hero.title") => "Acompañamiento y bienestar",
        (French, "hero.subtitle") => "Prenez rendez-vous en ligne en quelques clics.",
        (English, "hero.subtitle") => "Book your appointment online in a few clicks.",
        (Spanish, "hero.subtitle") => "Reserva tu cita en línea en unos clics.",
        (French, "about.title") => "À propos",
        (English, "about.title") => "About",
        (Spanish, "about.title") => "Acerca de",
        (French, "about.body") => "Séances individuelles de 30 minutes, en cabinet ou à distance.",
        (English, "about.body") => "Individual 30-minute sessions, in person or remotely.",
        (Spanish, "about.body") => "Sesiones individuales de 30 minutos, presenciales o a distancia.",
        (French, "booking.title") => "Réserver un rendez-vous",
        (English, "booking.title") => "Book an appointment",
        (Spanish, "booking.title") => "Reservar una cita",
        (French, "calendar.select_date") => "Sélectionnez une date",
        (English, "calendar.select_date") => "Select a date",
        (Spanish, "calendar.select_date") => "Selecciona una fecha",
        (French, "calendar.select_time") => "Choisissez un horaire",
        (English, "calendar.select_time") => "Choose a time",
        (Spanish, "calendar.select_time") => "Elige un horario",
        (French, "calendar.confirm") => "Réserver sur Calendly",
        (English, "calendar.confirm") => "Book on Calendly",
        (Spanish, "calendar.confirm") => "Reservar en Calendly",
        (French, "calendar.selected_date") => "Date sélectionnée",
        (English, "calendar.selected_date") => "Selected date",
        (Spanish, "calendar.selected_date") => "Fecha seleccionada",
        (French, "calendar.selected_time") => "Horaire sélectionné",
        (English, "calendar.selected_time") => "Selected time",
        (Spanish, "calendar.selected_time") => "Horario seleccionado",
        (French, "calendar.redirecting") => "Ouverture de Calendly...",
        (English, "calendar.redirecting") => "Opening Calendly...",
        (Spanish, "calendar.redirecting") => "Abriendo Calendly...",
        (French | English | Spanish, "calendar.prev") => "‹",
        (French | English | Spanish, "calendar.next") => "›",
        (French, "form.appointment.title") => "Demande de rendez-vous",
        (English, "form.appointment.title") => "Appointment request",
        (Spanish, "form.appointment.title") => "Solicitud de cita",
        (French, "form.contact.title") => "Contact",
        (English, "form.contact.title") => "Contact",
        (Spanish, "form.contact.title") => "Contacto",
        (French, "form.name") => "Nom",
        (English, "form.name") => "Name",
        (Spanish, "form.name") => "Nombre",
        (French, "form.email") => "E-mail",
        (English, "form.email") => "Email",
        (Spanish, "form.email") => "Correo electrónico",
        (French, "form.message") => "Message",
        (English, "form.message") => "Message",
        (Spanish, "form.message") => "Mensaje",
        (French, "form.send") => "Envoyer",
        (English, "form.send") => "Send",
        (Spanish, "form.send") => "Enviar",
        (French, "form.placeholder.name") => "Votre nom",
        (English, "form.placeholder.name") => "Your name",
        (Spanish, "form.placeholder.name") => "Tu nombre",
        (French, "form.placeholder.email") => "vous@exemple.fr",
        (English, "form.placeholder.email") => "you@example.com",
        (Spanish, "form.placeholder.email") => "tu@ejemplo.es",
        (French, "form.placeholder.message") => "Votre message...",
        (English, "form.placeholder.message") => "Your message...",
        (Spanish, "form.placeholder.message") => "Tu mensaje...",
        (French, "form.success") => "Merci pour votre message !",
        (English, "form.success") => "Thanks for your message!",
        (Spanish, "form.success") => "¡Gracias por tu mensaje!",
        (French, "language.label") => "Langue",
        (English, "language.label") => "Language",
        (Spanish, "language.label") => "Idioma",
        _ => return None,
    };
    Some(text)
}

/// Dictionary lookup with the fallback chain: requested language, default
/// language, then the key itself.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(Language::default(), key))
        .unwrap_or(key)
}

const MONTHS_FR: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const DAY_ABBREVS_FR: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];
const DAY_ABBREVS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const DAY_ABBREVS_ES: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

const DAY_NAMES_FR: [&str; 7] = [
    "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
];
const DAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const DAY_NAMES_ES: [&str; 7] = [
    "Domingo", "Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado",
];

pub fn month_names(lang: Language) -> &'static [&'static str; 12] {
    match lang {
        Language::French => &MONTHS_FR,
        Language::English => &MONTHS_EN,
        Language::Spanish => &MONTHS_ES,
    }
}

/// Sunday-first, matching the grid layout.
pub fn weekday_abbrevs(lang: Language) -> &'static [&'static str; 7] {
    match lang {
        Language::French => &DAY_ABBREVS_FR,
        Language::English => &DAY_ABBREVS_EN,
        Language::Spanish => &DAY_ABBREVS_ES,
    }
}

/// Sunday-first full names, used by [`long_date`].
pub fn weekday_names(lang: Language) -> &'static [&'static str; 7] {
    match lang {
        Language::French => &DAY_NAMES_FR,
        Language::English => &DAY_NAMES_EN,
        Language::Spanish => &DAY_NAMES_ES,
    }
}

/// Localized long form of a date, used by the selection summary.
pub fn long_date(lang: Language, date: NaiveDate) -> String {
    let weekday = weekday_names(lang)[date.weekday().num_days_from_sunday() as usize];
    let month = month_names(lang)[date.month0() as usize];
    match lang {
        Language::French => {
            format!("{} {} {} {}", weekday, date.day(), month.to_lowercase(), date.year())
        }
        Language::English => format!("{}, {} {}, {}", weekday, month, date.day(), date.year()),
        Language::Spanish => format!(
            "{}, {} de {} de {}",
            weekday,
            date.day(),
            month.to_lowercase(),
            date.year()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_glyphs_are_language_neutral() {
        for lang in Language::ALL {
            assert_eq!(lookup(lang, "calendar.prev"), Some("‹"));
            assert_eq!(lookup(lang, "calendar.next"), Some("›"));
        }
    }

    #[test]
    fn translate_prefers_the_requested_language() {
        assert_eq!(translate(Language::Spanish, "form.send"), "Enviar");
        assert_eq!(translate(Language::English, "form.send"), "Send");
    }

    #[test]
    fn accented_months_lowercase_cleanly_in_long_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        assert_eq!(long_date(Language::French, date), "Mercredi 14 février 2024");
    }
}

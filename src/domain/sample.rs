use chrono::{DateTime, TimeZone, Utc};

use crate::domain::ticket::{Ticket, TicketStatus};

/// Built-in dataset served when the tickets document is missing or unreadable.
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(
            1,
            "Error al iniciar sesión",
            "Los usuarios no pueden iniciar sesión en el portal desde esta mañana. El sistema devuelve un error 500 tras introducir las credenciales.",
            TicketStatus::Open,
            at(2024, 1, 15, 9, 30),
        ),
        Ticket::new(
            2,
            "Impresora de la oficina sin conexión",
            "La impresora de la segunda planta aparece como desconectada en todos los equipos del departamento de contabilidad.",
            TicketStatus::InProgress,
            at(2024, 1, 16, 11, 5),
        ),
        Ticket::new(
            3,
            "Solicitud de nuevo portátil",
            "Se necesita un portátil para la nueva incorporación del equipo de ventas, con incorporación prevista el próximo lunes.",
            TicketStatus::Open,
            at(2024, 1, 17, 8, 45),
        ),
        Ticket::new(
            4,
            "Correo electrónico lento",
            "El cliente de correo tarda varios minutos en sincronizar la bandeja de entrada y a veces no descarga los adjuntos.",
            TicketStatus::InProgress,
            at(2024, 1, 18, 14, 20),
        ),
        Ticket::new(
            5,
            "Restablecer contraseña de la VPN",
            "Un usuario ha bloqueado su cuenta de la VPN tras varios intentos fallidos y necesita restablecer la contraseña.",
            TicketStatus::Closed,
            at(2024, 1, 19, 10, 0),
        ),
        Ticket::new(
            6,
            "Pantalla parpadea en sala de reuniones",
            "El proyector de la sala de reuniones principal parpadea de forma intermitente durante las presentaciones.",
            TicketStatus::Open,
            at(2024, 1, 22, 16, 10),
        ),
        Ticket::new(
            7,
            "Instalación de software de diseño",
            "El equipo de marketing solicita la instalación de la suite de diseño en tres estaciones de trabajo.",
            TicketStatus::Closed,
            at(2024, 1, 23, 9, 15),
        ),
        Ticket::new(
            8,
            "Copia de seguridad fallida",
            "La copia de seguridad nocturna del servidor de archivos terminó con errores las dos últimas noches.",
            TicketStatus::InProgress,
            at(2024, 1, 24, 7, 50),
        ),
        Ticket::new(
            9,
            "Acceso a carpeta compartida",
            "Una analista necesita permisos de lectura y escritura en la carpeta compartida del proyecto de auditoría.",
            TicketStatus::Open,
            at(2024, 1, 25, 12, 35),
        ),
        Ticket::new(
            10,
            "Teléfono IP sin tono",
            "El teléfono IP de recepción no da tono de marcado después del corte eléctrico del fin de semana.",
            TicketStatus::Closed,
            at(2024, 1, 29, 8, 5),
        ),
    ]
}

// Callers pass valid literal dates only; `sample_dates_are_literal` pins them.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_ten_tickets_in_order() {
        let tickets = sample_tickets();
        let ids = tickets.iter().map(|ticket| ticket.id).collect::<Vec<_>>();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(tickets[0].status, TicketStatus::Open);
        assert_eq!(tickets[4].status, TicketStatus::Closed);
    }

    #[test]
    fn sample_dates_are_literal() {
        let dates = sample_tickets()
            .iter()
            .map(|ticket| ticket.created_at.to_rfc3339())
            .collect::<Vec<_>>();
        assert_eq!(dates[0], "2024-01-15T09:30:00+00:00");
        assert_eq!(dates[9], "2024-01-29T08:05:00+00:00");
        assert!(dates.iter().all(|date| date.starts_with("2024-01-")));
        assert!(in_order(&sample_tickets()));
    }

    fn in_order(tickets: &[Ticket]) -> bool {
        tickets
            .windows(2)
            .all(|pair| pair[0].created_at < pair[1].created_at)
    }

    #[test]
    fn sample_is_deterministic() {
        assert_eq!(sample_tickets(), sample_tickets());
        assert!(sample_tickets().iter().all(|ticket| !ticket.title.is_empty()
            && ticket.created_at != DateTime::<Utc>::default()));
    }
}

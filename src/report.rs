use std::{
    fmt::Display,
    io::{self, Write},
    process::ExitCode,
};

use crate::config::Targets;

pub const TOTAL_CHECKS: u8 = 4;

const RULE_WIDTH: usize = 50;

/// Pass counter over the fixed set of top-level checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: u8,
}

impl Summary {
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        }
    }

    pub fn is_success(&self) -> bool {
        self.passed == TOTAL_CHECKS
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Human-readable console report.
pub struct Report<W> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn title(&mut self) -> io::Result<()> {
        writeln!(self.out, "🧪 Running InnerCalm Integration Tests")?;
        self.rule()
    }

    pub fn section(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "\n{name}")
    }

    pub fn pass(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "✅ {msg}")
    }

    pub fn fail(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "❌ {msg}")
    }

    pub fn warn(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "⚠️  {msg}")
    }

    pub fn summary(&mut self, summary: &Summary, targets: &Targets) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule()?;
        writeln!(
            self.out,
            "📊 Test Results: {}/{TOTAL_CHECKS} tests passed",
            summary.passed
        )?;

        if summary.is_success() {
            writeln!(self.out, "🎉 All integration tests passed! The application is ready to use.")?;
            writeln!(self.out, "\n🚀 Access your application:")?;
            writeln!(self.out, "   Frontend: {}", targets.frontend_base())?;
            writeln!(self.out, "   Backend API: {}", targets.backend_base())?;
            writeln!(self.out, "   API Docs: {}", targets.backend_endpoint("/docs"))?;
        } else {
            self.warn("Some tests failed. Please check the services are running:")?;
            writeln!(
                self.out,
                "   Backend: cd backend && uvicorn main:app --reload --host 0.0.0.0 --port 8000"
            )?;
            writeln!(self.out, "   Frontend: cd frontend && npm run dev")?;
        }
        self.out.flush()
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }
}

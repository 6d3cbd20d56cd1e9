use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::{RuntimeError, Unwind};
use crate::expr::{Expr, ExprVisitor, NodeId};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::{Token, Type};

type EvalResult = Result<Object, Unwind>;
type ExecResult = Result<(), Unwind>;

/// Walks a resolved AST and evaluates it, producing printed output and a
/// final success/failure status. Owns the global scope and the chain of
/// environments live at any given point in the walk; `locals` is the
/// variable-depth side table produced by the resolver, keyed by the
/// expression node's own identity rather than by source location.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
    out: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            globals.borrow_mut().define(&native.name.lexeme.clone(), Object::from(native));
        }

        Interpreter {
            globals: Rc::clone(&globals),
            environment: globals,
            locals: HashMap::new(),
            out,
        }
    }

    /// Records the lexical depth resolved for a given expression node.
    pub fn resolve(&mut self, id: NodeId, depth: usize) {
        self.locals.insert(id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                return match unwind {
                    Unwind::Error(error) => Err(error),
                    Unwind::Return(_) => unreachable!("return outside of a function body"),
                };
            }
        }

        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Executes a block of statements in a fresh child environment, then
    /// restores the previous one regardless of how execution ends.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(());
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                result = Err(unwind);
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn look_up_variable(&mut self, id: NodeId, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&depth) => self.environment.borrow().get_at(depth, name),
            None => self.globals.borrow().get(name),
        }
    }
}

impl<'a> ExprVisitor<EvalResult> for Interpreter<'a> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(Object::from(literal.clone()))
    }

    fn visit_logical_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Logical(logical) = expr else { unreachable!() };

        let left = self.evaluate(&logical.left)?;

        if logical.operator.r#type == Type::Or {
            if left.is_truthy() {
                return Ok(left);
            }
        } else if !left.is_truthy() {
            return Ok(left);
        }

        self.evaluate(&logical.right)
    }

    fn visit_unary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Unary(unary) = expr else { unreachable!() };

        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: unary.operator.clone(),
                message: "Operand must be a number.".to_string(),
            }.into()),
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!(),
        }
    }

    fn visit_binary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Binary(binary) = expr else { unreachable!() };

        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        match binary.operator.r#type {
            Type::Greater | Type::GreaterEqual | Type::Less | Type::LessEqual => {
                let ordering = left.partial_cmp(&right).ok_or_else(|| RuntimeError {
                    token: binary.operator.clone(),
                    message: "Operands must be numbers.".to_string(),
                })?;

                let result = match binary.operator.r#type {
                    Type::Greater => ordering.is_gt(),
                    Type::GreaterEqual => ordering.is_ge(),
                    Type::Less => ordering.is_lt(),
                    Type::LessEqual => ordering.is_le(),
                    _ => unreachable!(),
                };

                Ok(Object::from(result))
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::Minus => (left - right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }.into()),
            Type::Slash => (left / right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }.into()),
            Type::Star => (left * right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }.into()),
            Type::Plus => (left + right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be two numbers or two strings.".to_string(),
            }.into()),
            _ => unreachable!(),
        }
    }

    fn visit_grouping_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Grouping(grouping) = expr else { unreachable!() };
        self.evaluate(&grouping.expr)
    }

    fn visit_variable_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Variable(variable) = expr else { unreachable!() };
        Ok(self.look_up_variable(variable.id, &variable.name)?)
    }

    fn visit_assign_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Assign(assign) = expr else { unreachable!() };

        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.id) {
            Some(&depth) => self.environment.borrow_mut().assign_at(depth, &assign.name, value.clone()),
            None => self.globals.borrow_mut().assign(&assign.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Call(call) = expr else { unreachable!() };

        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function.as_ref(),
            Object::NativeFunction(function) => function.as_ref(),
            Object::Class(class) => {
                let arity = class.borrow().arity();
                if arguments.len() != arity {
                    return Err(RuntimeError {
                        token: call.paren.clone(),
                        message: format!("Expected {} arguments but got {}.", arity, arguments.len()),
                    }.into());
                }
                return class.borrow().call(self, arguments);
            },
            _ => return Err(RuntimeError {
                token: call.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }.into()),
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            }.into());
        }

        callable.call(self, arguments)
    }

    fn visit_get_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Get(get) = expr else { unreachable!() };

        let object = self.evaluate(&get.object)?;

        match object {
            Object::Instance(instance) => Instance::get(&get.name, &instance),
            _ => Err(RuntimeError {
                token: get.name.clone(),
                message: "Only instances have properties.".to_string(),
            }.into()),
        }
    }

    fn visit_set_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Set(set) = expr else { unreachable!() };

        let object = self.evaluate(&set.object)?;

        let instance = match object {
            Object::Instance(instance) => instance,
            _ => return Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields.".to_string(),
            }.into()),
        };

        let value = self.evaluate(&set.value)?;
        instance.borrow_mut().set(&set.name, value.clone());

        Ok(value)
    }

    fn visit_this_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::This(this) = expr else { unreachable!() };
        Ok(self.look_up_variable(this.id, &this.keyword)?)
    }

    fn visit_super_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Super(super_expr) = expr else { unreachable!() };

        let depth = *self.locals.get(&super_expr.id)
            .expect("resolver to have recorded a depth for every 'super' expression");

        let superclass = self.environment.borrow().get_at(depth, &super_expr.keyword)?;
        let Object::Class(superclass) = superclass else {
            unreachable!("'super' to always resolve to a class")
        };

        let this_token = Token::from("this");
        let this = self.environment.borrow().get_at(depth - 1, &this_token)?;

        let method = superclass.borrow().find_method(&super_expr.method.lexeme);
        match method {
            Some(method) => Ok(Object::from(method.bind(this))),
            None => Err(RuntimeError {
                token: super_expr.method.clone(),
                message: format!("Undefined property '{}'.", super_expr.method.lexeme),
            }.into()),
        }
    }
}

impl<'a> StmtVisitor<ExecResult> for Interpreter<'a> {
    fn visit_expression_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Print(data) = stmt else { unreachable!() };
        let value = self.evaluate(&data.expr)?;

        let _ = writeln!(self.out, "{value}");
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Var(data) = stmt else { unreachable!() };

        let value = match &data.initializer {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Block(data) = stmt else { unreachable!() };

        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
        self.execute_block(&data.statements, environment)
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::If(data) = stmt else { unreachable!() };

        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::While(data) = stmt else { unreachable!() };

        while self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.body)?;
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Function(data) = stmt else { unreachable!() };

        let function = Function::new(data, Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Return(data) = stmt else { unreachable!() };

        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::from(Literal::Nil),
        };

        Err(Unwind::Return(value))
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Class(data) = stmt else { unreachable!() };

        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr)?;
                let Expr::Variable(variable) = expr else { unreachable!() };
                match value {
                    Object::Class(class) => Some(class),
                    _ => return Err(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class.".to_string(),
                    }.into()),
                }
            },
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(Literal::Nil));

        let method_environment = if let Some(superclass) = &superclass {
            let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
            environment.borrow_mut().define("super", Object::Class(Rc::clone(superclass)));
            environment
        } else {
            Rc::clone(&self.environment)
        };

        let mut methods = HashMap::new();
        for method in &data.methods {
            let Stmt::Function(declaration) = method else { unreachable!() };
            let is_initializer = declaration.name.lexeme == "init";
            let function = Function::new(declaration, Rc::clone(&method_environment), is_initializer);
            methods.insert(declaration.name.lexeme.clone(), Rc::new(function));
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);
        let class = Rc::new(RefCell::new(class));

        self.environment.borrow_mut().assign(&data.name, Object::Class(class))?;
        Ok(())
    }
}

/*!
# `GOTO <line number>`

## Purpose
Moves execution to another line.

## Remarks
A line number that doesn't exist goes to the next line after it.
Past the last line the program ends. `GOTO 0` ends the program.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/
